//! Filesystem adapter for the `ProjectFilesystem` port.
//!
//! `FilesystemStore` owns the project root path and enforces path-traversal
//! safety for every operation.

mod project_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reject paths that leave the project root once `.` and `..` are folded.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let joined = self.root.join(path);
        if lexical_path(&joined).starts_with(lexical_path(&self.root)) {
            Ok(())
        } else {
            Err(AppError::PathTraversal(path.display().to_string()))
        }
    }

    /// Express an absolute path below the root as a `/`-separated relative path.
    pub(crate) fn relative_to_root(&self, path: &Path) -> Result<String, AppError> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            AppError::InvalidPath(format!(
                "{} is outside project root {}",
                path.display(),
                self.root.display()
            ))
        })?;
        let segments: Vec<String> = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect();
        Ok(segments.join("/"))
    }
}

/// Fold `.` and `..` segments without touching the filesystem; the path need not exist.
pub(crate) fn lexical_path(path: &Path) -> PathBuf {
    let mut folded = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                folded.pop();
            }
            other => folded.push(other.as_os_str()),
        }
    }
    folded
}
