//! Invocation context: the project name and where the project will live.

use std::path::{Component, Path, PathBuf};

use sprout_util::errors::SproutError;
use sprout_util::fs::{ensure_dir, path_is_occupied, DirGuard};

/// Everything a scaffolding run needs to know about its target, fixed at
/// startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    project_name: String,
    base_dir: PathBuf,
    project_dir: PathBuf,
}

impl InvocationContext {
    /// Build the context from the first positional argument.
    ///
    /// `base_dir` is the directory the project is created in, normally the
    /// process working directory. The name is used verbatim, so a nested or
    /// absolute name resolves accordingly.
    pub fn resolve(name: Option<&str>, base_dir: &Path) -> Result<Self, SproutError> {
        let project_name = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => return Err(SproutError::MissingArgument),
        };
        let project_dir = normalize(&base_dir.join(&project_name));

        Ok(Self {
            project_name,
            base_dir: base_dir.to_path_buf(),
            project_dir,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Create the project directory, refusing to reuse an existing path.
    ///
    /// Missing parents are created too. The returned guard deletes the
    /// project directory again unless it is committed.
    pub fn allocate_project_dir(&self) -> Result<DirGuard, SproutError> {
        let dir = &self.project_dir;
        if path_is_occupied(dir) {
            return Err(SproutError::DirectoryAlreadyExists { path: dir.clone() });
        }

        if let Some(parent) = dir.parent() {
            ensure_dir(parent)?;
        }

        match std::fs::create_dir(dir) {
            Ok(()) => {
                tracing::debug!("Created project directory {}", dir.display());
                Ok(DirGuard::new(dir))
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                Err(SproutError::DirectoryAlreadyExists { path: dir.clone() })
            }
            Err(e) => Err(SproutError::Io(e)),
        }
    }
}

/// Lexically resolve `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
