//! The project template and its materialization.
//!
//! The default template is the `template/` directory of this crate, compiled
//! into the binary with `include_dir!`, so a freshly built `sprout` needs
//! nothing on disk. Users can point at another tree through the CLI or
//! `[template].dir` in the global config. Contents are copied verbatim; the
//! only file touched afterwards is `package.json` (see [`crate::manifest`]).

use std::fmt;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir, DirEntry};
use sprout_util::errors::SproutError;
use sprout_util::fs::copy_dir_recursive;

use crate::config::TemplateConfig;

static EMBEDDED_TEMPLATE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/template");

/// Where the template tree comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// The template compiled into the binary.
    Embedded,
    /// A template directory on disk.
    Directory(PathBuf),
}

impl Template {
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::Directory(root.into())
    }

    /// Pick the template to use.
    ///
    /// An explicit override wins, then the configured directory, then the
    /// embedded template. Directories are not checked here; a missing one
    /// surfaces when it is copied.
    pub fn locate(explicit: Option<&Path>, config: &TemplateConfig) -> Self {
        if let Some(dir) = explicit {
            return Self::directory(dir);
        }
        if let Some(ref dir) = config.dir {
            return Self::directory(dir);
        }
        Self::Embedded
    }

    /// Copy the whole template tree into `dest`, which must already exist.
    /// Returns the number of files written.
    pub fn materialize(&self, dest: &Path) -> Result<usize, SproutError> {
        let copied = match self {
            Self::Embedded => extract_embedded_dir(&EMBEDDED_TEMPLATE, dest)?,
            Self::Directory(root) => {
                copy_dir_recursive(root, dest).map_err(|e| SproutError::TemplateCopyFailed {
                    path: root.clone(),
                    message: e.to_string(),
                })?
            }
        };
        tracing::debug!("Copied {copied} files from {self} to {}", dest.display());
        Ok(copied)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("the built-in template"),
            Self::Directory(root) => write!(f, "{}", root.display()),
        }
    }
}

/// Write every directory and file of an embedded tree below `dest`.
///
/// Entry paths are relative to the embedded root, so `dest` stays the same
/// across recursion.
fn extract_embedded_dir(dir: &Dir<'_>, dest: &Path) -> Result<usize, SproutError> {
    let mut written = 0;
    for entry in dir.entries() {
        let target = dest.join(entry.path());
        match entry {
            DirEntry::Dir(sub) => {
                std::fs::create_dir_all(&target).map_err(|e| copy_failed(&target, e))?;
                written += extract_embedded_dir(sub, dest)?;
            }
            DirEntry::File(file) => {
                std::fs::write(&target, file.contents()).map_err(|e| copy_failed(&target, e))?;
                written += 1;
            }
        }
    }
    Ok(written)
}

fn copy_failed(path: &Path, e: std::io::Error) -> SproutError {
    SproutError::TemplateCopyFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
