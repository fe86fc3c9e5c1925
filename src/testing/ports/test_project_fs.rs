//! Test double for `ProjectFilesystem`.

use std::io;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `ProjectFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockProjectFs {
    files: TestFiles,
}

impl MockProjectFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files }
    }
}

fn dir_prefix(path: &str) -> String {
    if path.ends_with('/') { path.to_string() } else { format!("{}/", path) }
}

impl ProjectFilesystem for MockProjectFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.add(path, content);
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        let prefix = dir_prefix(path);
        self.files.files.lock().unwrap().keys().any(|key| key.starts_with(&prefix))
    }

    fn list_files(&self, dir: &str, recursive: bool) -> Result<Vec<String>, AppError> {
        let prefix = dir_prefix(dir);
        Ok(self
            .files
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|key| key.starts_with(&prefix))
            .filter(|key| recursive || !key[prefix.len()..].contains('/'))
            .cloned()
            .collect())
    }

    fn rename(&self, from: &str, to: &str) -> Result<(), AppError> {
        if self.files.failing_renames.lock().unwrap().contains(from) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Mock rename refused for {}", from),
            )));
        }
        let mut files = self.files.files.lock().unwrap();
        if files.contains_key(to) {
            return Err(AppError::RenameTargetExists(to.to_string()));
        }
        let content = files.remove(from).ok_or_else(|| {
            AppError::from(io::Error::new(io::ErrorKind::NotFound, "Mock file not found"))
        })?;
        files.insert(to.to_string(), content);
        Ok(())
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
