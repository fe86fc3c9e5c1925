//! `ProjectFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::PathBuf;

use glob::{MatchOptions, Pattern};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::FilesystemStore;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

impl ProjectFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.is_dir()
    }

    fn list_files(&self, dir: &str, recursive: bool) -> Result<Vec<String>, AppError> {
        let full_path = self.resolve_path(dir);
        self.validate_path_within_root(&full_path)?;

        let mut files = Vec::new();
        if recursive {
            let escaped = Pattern::escape(&full_path.to_string_lossy());
            let pattern = format!("{}/**/*", escaped.trim_end_matches('/'));
            for entry in glob::glob_with(&pattern, GLOB_OPTIONS)? {
                let path = entry?;
                if path.is_file() {
                    files.push(self.relative_to_root(&path)?);
                }
            }
        } else {
            for entry in fs::read_dir(&full_path).map_err(AppError::from)? {
                let path = entry.map_err(AppError::from)?.path();
                if path.is_file() {
                    files.push(self.relative_to_root(&path)?);
                }
            }
        }
        files.sort();
        Ok(files)
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), AppError> {
        let source = self.resolve_path(from);
        let target = self.resolve_path(to);
        self.validate_path_within_root(&source)?;
        self.validate_path_within_root(&target)?;
        if target.exists() {
            return Err(AppError::RenameTargetExists(to.to_string()));
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::rename(source, target).map_err(AppError::from)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }
}
