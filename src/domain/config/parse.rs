//! Pure parse/validate for tool settings (`cymig.toml`).

use super::settings::{MigrationSettings, SettingsFile};
use crate::domain::AppError;

/// Parse and validate tool settings from TOML content.
pub fn parse_settings_content(content: &str) -> Result<MigrationSettings, AppError> {
    let file: SettingsFile = toml::from_str(content)?;
    let settings = file.migration;
    if settings.plugins_file.trim().is_empty() {
        return Err(AppError::InvalidPath("migration.plugins_file must not be empty".to_string()));
    }
    if settings.output.as_deref().is_some_and(|output| output.trim().is_empty()) {
        return Err(AppError::InvalidPath("migration.output must not be empty".to_string()));
    }
    Ok(settings)
}
