use sprout_core::manifest::{patch_name, PackageManifest};
use sprout_util::errors::SproutError;
use tempfile::TempDir;

const TEMPLATE_MANIFEST: &str = r#"{
  "name": "template",
  "version": "1.0.0",
  "private": true,
  "scripts": { "dev": "vite", "build": "vite build" },
  "dependencies": { "react": "^18.2.0" },
  "weight": 1.50
}"#;

#[test]
fn test_parse_reads_name() {
    let manifest = PackageManifest::parse("package.json", TEMPLATE_MANIFEST).unwrap();
    assert_eq!(manifest.name(), Some("template"));
    assert_eq!(manifest.path(), std::path::Path::new("package.json"));
}

#[test]
fn test_set_name_keeps_key_order() {
    let mut manifest = PackageManifest::parse("package.json", TEMPLATE_MANIFEST).unwrap();
    manifest.set_name("my-app");

    let keys: Vec<&str> = manifest.keys().collect();
    assert_eq!(
        keys,
        ["name", "version", "private", "scripts", "dependencies", "weight"]
    );
    assert_eq!(manifest.name(), Some("my-app"));
}

#[test]
fn test_set_name_appends_when_missing() {
    let mut manifest =
        PackageManifest::parse("package.json", r#"{"version": "1.0.0"}"#).unwrap();
    manifest.set_name("my-app");

    let keys: Vec<&str> = manifest.keys().collect();
    assert_eq!(keys, ["version", "name"]);
}

#[test]
fn test_pretty_string_uses_four_spaces() {
    let mut manifest = PackageManifest::parse(
        "package.json",
        r#"{"name": "template", "version": "1.0.0"}"#,
    )
    .unwrap();
    manifest.set_name("my-app");

    assert_eq!(
        manifest.to_pretty_string().unwrap(),
        "{\n    \"name\": \"my-app\",\n    \"version\": \"1.0.0\"\n}"
    );
}

#[test]
fn test_pretty_string_preserves_number_text() {
    let manifest = PackageManifest::parse("package.json", TEMPLATE_MANIFEST).unwrap();
    let out = manifest.to_pretty_string().unwrap();
    assert!(out.contains("\"weight\": 1.50"), "got: {out}");
}

#[test]
fn test_parse_rejects_invalid_json() {
    let err = PackageManifest::parse("package.json", "{ not json").unwrap_err();
    assert!(matches!(err, SproutError::ManifestParseFailed { .. }));
}

#[test]
fn test_parse_rejects_non_object() {
    let err = PackageManifest::parse("package.json", "[1, 2, 3]").unwrap_err();
    match err {
        SproutError::ManifestParseFailed { message, .. } => {
            assert!(message.contains("an array"), "got: {message}")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_missing_manifest_fails() {
    let tmp = TempDir::new().unwrap();
    let err = PackageManifest::load(tmp.path()).unwrap_err();
    match err {
        SproutError::ManifestParseFailed { path, .. } => {
            assert_eq!(path, tmp.path().join("package.json"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_patch_name_rewrites_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("package.json"), TEMPLATE_MANIFEST).unwrap();

    patch_name(tmp.path(), "my-app").unwrap();

    let written = std::fs::read_to_string(tmp.path().join("package.json")).unwrap();
    assert!(written.starts_with("{\n    \"name\": \"my-app\",\n    \"version\": \"1.0.0\""));
    assert!(!written.ends_with('\n'));

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    let original: serde_json::Value = serde_json::from_str(TEMPLATE_MANIFEST).unwrap();
    assert_eq!(value["name"], "my-app");
    for key in ["version", "private", "scripts", "dependencies", "weight"] {
        assert_eq!(value[key], original[key], "{key} changed");
    }
}
