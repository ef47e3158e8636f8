use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// A recursive copy that failed at `path`.
#[derive(Debug, Error)]
#[error("{}: {source}", path.display())]
pub struct CopyDirError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl CopyDirError {
    fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Returns `true` if anything sits at `path`, including a dangling symlink.
pub fn path_is_occupied(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Copy the contents of `src` into the existing directory `dst`.
///
/// Files, nested directories and (on Unix) symlinks are reproduced with the
/// same relative layout. Symlinks are recreated as links rather than followed.
/// Returns the number of files and links written.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize, CopyDirError> {
    if !src.is_dir() {
        return Err(CopyDirError::new(
            src,
            io::Error::new(io::ErrorKind::NotFound, "not a readable directory"),
        ));
    }

    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            CopyDirError {
                path,
                source: io::Error::from(e),
            }
        })?;

        let relative = entry.path().strip_prefix(src).map_err(|e| {
            CopyDirError::new(entry.path(), io::Error::other(e))
        })?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| CopyDirError::new(&target, e))?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
            copied += 1;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| CopyDirError::new(&target, e))?;
            copied += 1;
        }
        tracing::trace!("copied {}", relative.display());
    }

    Ok(copied)
}

#[cfg(unix)]
fn copy_symlink(src: &Path, target: &Path) -> Result<(), CopyDirError> {
    let link = std::fs::read_link(src).map_err(|e| CopyDirError::new(src, e))?;
    std::os::unix::fs::symlink(&link, target).map_err(|e| CopyDirError::new(target, e))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, target: &Path) -> Result<(), CopyDirError> {
    std::fs::copy(src, target)
        .map(|_| ())
        .map_err(|e| CopyDirError::new(target, e))
}

/// Removes a freshly created directory tree when dropped, unless committed.
///
/// Hand one out right after creating a directory that later steps populate,
/// and call [`DirGuard::commit`] once the directory is complete.
#[derive(Debug)]
pub struct DirGuard {
    path: PathBuf,
    armed: bool,
}

impl DirGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: true,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the directory and return its path.
    pub fn commit(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::debug!("Removing partially created {}", self.path.display());
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::warn!("Failed to remove directory {}: {e}", self.path.display());
        }
    }
}
