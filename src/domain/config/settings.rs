//! Tool settings read from `cymig.toml`.

use serde::Deserialize;

use super::legacy::LEGACY_CONFIG_FILE;
use super::module::{ConfigModuleOptions, DEFAULT_PLUGINS_FILE, ModuleFlavor};

pub const SETTINGS_FILE: &str = "cymig.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub migration: MigrationSettings,
}

/// `[migration]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MigrationSettings {
    /// Module system of the generated config.
    pub flavor: ModuleFlavor,
    /// Plugin file required when the legacy config has no `pluginsFile`.
    pub plugins_file: String,
    /// Legacy config location, relative to the project root.
    pub legacy_config: String,
    /// Output file; defaults to the flavor's conventional name.
    pub output: Option<String>,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            flavor: ModuleFlavor::default(),
            plugins_file: DEFAULT_PLUGINS_FILE.to_string(),
            legacy_config: LEGACY_CONFIG_FILE.to_string(),
            output: None,
        }
    }
}

impl MigrationSettings {
    pub fn output_file(&self) -> &str {
        self.output.as_deref().unwrap_or(self.flavor.default_file_name())
    }

    pub fn module_options(&self) -> ConfigModuleOptions {
        ConfigModuleOptions { flavor: self.flavor, default_plugins_file: self.plugins_file.clone() }
    }
}
