use std::path::Path;

use sprout_core::config::TemplateConfig;
use sprout_core::template::Template;
use sprout_util::errors::SproutError;
use tempfile::TempDir;

fn write_template(root: &Path) {
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::write(
        root.join("package.json"),
        r#"{"name": "template", "version": "1.0.0"}"#,
    )
    .unwrap();
    std::fs::write(root.join("src/index.js"), "console.log('hello');\n").unwrap();
}

#[test]
fn test_locate_prefers_explicit_dir() {
    let config = TemplateConfig {
        dir: Some("/from/config".into()),
    };
    let tmpl = Template::locate(Some(Path::new("/from/cli")), &config);
    assert_eq!(tmpl, Template::directory("/from/cli"));
}

#[test]
fn test_locate_falls_back_to_config() {
    let config = TemplateConfig {
        dir: Some("/from/config".into()),
    };
    let tmpl = Template::locate(None, &config);
    assert_eq!(tmpl, Template::directory("/from/config"));
}

#[test]
fn test_locate_defaults_to_embedded() {
    let tmpl = Template::locate(None, &TemplateConfig::default());
    assert_eq!(tmpl, Template::Embedded);
}

#[test]
fn test_embedded_template_materializes_full_tree() {
    let dst = TempDir::new().unwrap();

    let copied = Template::Embedded.materialize(dst.path()).unwrap();

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("template");
    assert_eq!(copied, 4);
    for file in ["package.json", "src/index.js", "README.md", ".gitignore"] {
        assert_eq!(
            std::fs::read(dst.path().join(file)).unwrap(),
            std::fs::read(source.join(file)).unwrap(),
            "{file} differs from the template source"
        );
    }
}

#[test]
fn test_embedded_template_manifest_is_patchable() {
    let dst = TempDir::new().unwrap();
    Template::Embedded.materialize(dst.path()).unwrap();

    let manifest = sprout_core::manifest::PackageManifest::load(dst.path()).unwrap();
    assert_eq!(manifest.name(), Some("template"));
}

#[test]
fn test_display_names_source() {
    assert_eq!(Template::Embedded.to_string(), "the built-in template");
    assert_eq!(
        Template::directory("/opt/templates/web").to_string(),
        "/opt/templates/web"
    );
}

#[test]
fn test_materialize_copies_full_tree() {
    let src = TempDir::new().unwrap();
    let dst = TempDir::new().unwrap();
    write_template(src.path());

    let copied = Template::directory(src.path()).materialize(dst.path()).unwrap();

    assert_eq!(copied, 2);
    assert_eq!(
        std::fs::read(dst.path().join("src/index.js")).unwrap(),
        std::fs::read(src.path().join("src/index.js")).unwrap()
    );
    assert!(dst.path().join("package.json").is_file());
}

#[test]
fn test_materialize_twice_is_identical() {
    let src = TempDir::new().unwrap();
    write_template(src.path());
    let tmpl = Template::directory(src.path());

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    tmpl.materialize(first.path()).unwrap();
    tmpl.materialize(second.path()).unwrap();

    for file in ["package.json", "src/index.js"] {
        assert_eq!(
            std::fs::read(first.path().join(file)).unwrap(),
            std::fs::read(second.path().join(file)).unwrap()
        );
    }
}

#[test]
fn test_materialize_missing_template_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");
    let dst = TempDir::new().unwrap();

    let err = Template::directory(&missing).materialize(dst.path()).unwrap_err();
    match err {
        SproutError::TemplateCopyFailed { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}
