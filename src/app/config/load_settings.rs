//! Tool settings loading from the project root.

use crate::domain::config::{self, MigrationSettings, SETTINGS_FILE};
use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Load and parse `cymig.toml`, falling back to defaults when it is absent.
pub fn load_settings<F: ProjectFilesystem>(project: &F) -> Result<MigrationSettings, AppError> {
    if !project.file_exists(SETTINGS_FILE) {
        tracing::debug!("No {} found, using default settings", SETTINGS_FILE);
        return Ok(MigrationSettings::default());
    }

    let content = project.read_file(SETTINGS_FILE)?;
    config::parse_settings_content(&content)
}
