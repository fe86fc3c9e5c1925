//! Legacy `cypress.json` loading from the project root.

use crate::domain::{AppError, LegacyConfig};
use crate::ports::ProjectFilesystem;

/// Load the legacy config at `path` (relative to the project root).
pub fn load_legacy_config<F: ProjectFilesystem>(
    project: &F,
    path: &str,
) -> Result<LegacyConfig, AppError> {
    if !project.file_exists(path) {
        return Err(AppError::ConfigNotFound(path.to_string()));
    }

    let content = project.read_file(path)?;
    LegacyConfig::parse(&content)
}

/// Load the legacy config if present; a missing file reads as an empty config.
pub fn load_legacy_config_or_default<F: ProjectFilesystem>(
    project: &F,
    path: &str,
) -> Result<LegacyConfig, AppError> {
    match load_legacy_config(project, path) {
        Err(AppError::ConfigNotFound(_)) => Ok(LegacyConfig::default()),
        other => other,
    }
}
