pub mod legacy;
pub mod module;
pub mod object_source;
pub mod parse;
pub mod reduce;
pub mod settings;

pub use legacy::{
    DEFAULT_COMPONENT_FOLDER, DEFAULT_INTEGRATION_FOLDER, LEGACY_CONFIG_FILE, LegacyConfig,
    SpecFolders,
};
pub use module::{ConfigModuleOptions, DEFAULT_PLUGINS_FILE, ModuleFlavor, create_config_string};
pub use object_source::{format_object, format_object_for_config};
pub use parse::parse_settings_content;
pub use reduce::{Bucket, ConfigOptions, KEY_RULES, Placement, placement_for, reduce_config};
pub use settings::{MigrationSettings, SETTINGS_FILE};
