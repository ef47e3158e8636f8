//! Patching the generated project's `package.json`.
//!
//! The manifest is kept as an ordered generic JSON object. Only `name` is
//! ever changed; every other key is passed through with its original order
//! and (thanks to `arbitrary_precision`) its original number formatting.

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use sprout_util::errors::SproutError;

use crate::MANIFEST_FILE;

const INDENT: &[u8] = b"    ";

/// A loaded `package.json`.
#[derive(Debug, Clone)]
pub struct PackageManifest {
    path: PathBuf,
    doc: Map<String, Value>,
}

impl PackageManifest {
    /// Load `package.json` from the root of `project_dir`.
    pub fn load(project_dir: &Path) -> Result<Self, SproutError> {
        let path = project_dir.join(MANIFEST_FILE);
        let content =
            std::fs::read_to_string(&path).map_err(|e| SproutError::ManifestParseFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        Self::parse(path, &content)
    }

    /// Parse manifest text that will later be saved to `path`.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, SproutError> {
        let path = path.into();
        let value: Value =
            serde_json::from_str(content).map_err(|e| SproutError::ManifestParseFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        match value {
            Value::Object(doc) => Ok(Self { path, doc }),
            other => Err(SproutError::ManifestParseFailed {
                path,
                message: format!("expected a JSON object, found {}", kind(&other)),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.doc.get("name").and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.doc.keys().map(String::as_str)
    }

    /// Overwrite `name`. An existing key keeps its position; a missing one
    /// is appended.
    pub fn set_name(&mut self, name: &str) {
        self.doc
            .insert("name".to_string(), Value::String(name.to_string()));
    }

    /// Render as 4-space indented JSON without a trailing newline.
    pub fn to_pretty_string(&self) -> Result<String, SproutError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.doc
            .serialize(&mut ser)
            .map_err(|e| self.write_error(e))?;
        String::from_utf8(buf).map_err(|e| self.write_error(e))
    }

    /// Write the manifest back to the path it was loaded from.
    pub fn save(&self) -> Result<(), SproutError> {
        let content = self.to_pretty_string()?;
        std::fs::write(&self.path, content).map_err(|e| self.write_error(e))
    }

    fn write_error(&self, e: impl std::fmt::Display) -> SproutError {
        SproutError::ManifestWriteFailed {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

/// Load, rename and save the manifest inside `project_dir`.
pub fn patch_name(project_dir: &Path, project_name: &str) -> Result<PackageManifest, SproutError> {
    let mut manifest = PackageManifest::load(project_dir)?;
    tracing::debug!(
        "Renaming manifest {} from {:?} to {project_name:?}",
        manifest.path().display(),
        manifest.name()
    );
    manifest.set_name(project_name);
    tracing::debug!(
        "Manifest keys after patch: {}",
        manifest.keys().collect::<Vec<_>>().join(", ")
    );
    manifest.save()?;
    Ok(manifest)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
