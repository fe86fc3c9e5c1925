//! Project-level filesystem operations.
//!
//! This port provides file I/O scoped to the project root. It does not own
//! spec naming semantics; those belong to the domain rename rule.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for project filesystem operations used by the migration.
///
/// All `path` arguments and returned paths are relative to the project root
/// and use `/` as the separator.
pub trait ProjectFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// List regular files under `dir`, sorted.
    ///
    /// With `recursive` every nested file is returned (dotfiles excluded);
    /// otherwise only the immediate files of `dir`.
    fn list_files(&self, dir: &str, recursive: bool) -> Result<Vec<String>, AppError>;

    /// Move a file, creating the target's parent directories as needed.
    fn rename(&self, from: &str, to: &str) -> Result<(), AppError>;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
