//! Rendering of the migrated `cypress.config.*` module.

use minijinja::{AutoEscape, Environment, context};
use serde::{Deserialize, Serialize};

use super::legacy::LegacyConfig;
use super::object_source::{format_object_for_config, quote};
use super::reduce::reduce_config;
use crate::domain::{AppError, TestingType};

static CONFIG_MODULE_TEMPLATE: &str = include_str!("../../assets/config_module.js.j2");

/// Plugin file required when the legacy config does not name one.
pub const DEFAULT_PLUGINS_FILE: &str = "./cypress/plugins/index.js";

/// Module system of the generated config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFlavor {
    /// `require` / `module.exports`, written as `cypress.config.js`.
    #[default]
    CommonJs,
    /// `import` / `export default`, written as `cypress.config.ts`.
    Esm,
}

impl ModuleFlavor {
    fn import_line(&self) -> &'static str {
        match self {
            ModuleFlavor::CommonJs => "const { defineConfig } = require('cypress')",
            ModuleFlavor::Esm => "import { defineConfig } from 'cypress'",
        }
    }

    fn export_open(&self) -> &'static str {
        match self {
            ModuleFlavor::CommonJs => "module.exports = defineConfig",
            ModuleFlavor::Esm => "export default defineConfig",
        }
    }

    /// Conventional file name for a config module of this flavor.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ModuleFlavor::CommonJs => "cypress.config.js",
            ModuleFlavor::Esm => "cypress.config.ts",
        }
    }
}

/// Rendering options for [`create_config_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigModuleOptions {
    pub flavor: ModuleFlavor,
    /// Plugin file required when the legacy config has no `pluginsFile`.
    pub default_plugins_file: String,
}

impl Default for ConfigModuleOptions {
    fn default() -> Self {
        Self { flavor: ModuleFlavor::default(), default_plugins_file: DEFAULT_PLUGINS_FILE.to_string() }
    }
}

#[derive(Debug, Serialize)]
struct TestingBlock {
    name: &'static str,
    plugin_path: String,
    options: String,
}

/// Render the source of a config module equivalent to `legacy`.
///
/// Global options come first, then an `e2e` and a `component` block. A block is
/// only emitted when its bucket has options, and always carries a
/// `setupNodeEvents` hook requiring the plugin file.
pub fn create_config_string(
    legacy: &LegacyConfig,
    options: &ConfigModuleOptions,
) -> Result<String, AppError> {
    let reduced = reduce_config(legacy);
    let plugins_file = legacy.plugins_file().unwrap_or(options.default_plugins_file.as_str());
    let plugin_path = quote(&require_path(plugins_file));

    let blocks: Vec<TestingBlock> = [TestingType::E2e, TestingType::Component]
        .into_iter()
        .filter(|testing_type| !reduced.testing(*testing_type).is_empty())
        .map(|testing_type| TestingBlock {
            name: testing_type.config_key(),
            plugin_path: plugin_path.clone(),
            options: format_object_for_config(reduced.testing(testing_type), 2),
        })
        .collect();

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    let template = env.template_from_str(CONFIG_MODULE_TEMPLATE)?;

    let rendered = template.render(context! {
        import_line => options.flavor.import_line(),
        export_open => options.flavor.export_open(),
        global_options => format_object_for_config(&reduced.global, 1),
        blocks => blocks,
    })?;
    Ok(rendered)
}

/// Make a plugin path usable in `require`: bare relative paths get a `./` prefix.
fn require_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    if path.starts_with("./") || path.starts_with("../") || path.starts_with('/') {
        path
    } else {
        format!("./{path}")
    }
}
