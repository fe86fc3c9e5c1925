//! The flat `cypress.json` configuration object.

use serde_json::{Map, Value};

use crate::domain::AppError;

pub const LEGACY_CONFIG_FILE: &str = "cypress.json";

pub const DEFAULT_INTEGRATION_FOLDER: &str = "cypress/integration";
pub const DEFAULT_COMPONENT_FOLDER: &str = "cypress/component";

/// Legacy configuration object, keys kept in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyConfig {
    options: Map<String, Value>,
}

/// Spec folders declared (or implied) by a legacy config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFolders {
    pub integration: Option<String>,
    pub component: Option<String>,
}

impl LegacyConfig {
    pub fn new(options: Map<String, Value>) -> Self {
        Self { options }
    }

    /// Parse legacy JSON content. The top level must be an object.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(options) => Ok(Self { options }),
            other => Err(AppError::InvalidLegacyConfig(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Explicit `pluginsFile` path, if the legacy config names one.
    pub fn plugins_file(&self) -> Option<&str> {
        self.options.get("pluginsFile").and_then(Value::as_str)
    }

    /// Resolve the integration and component folders.
    ///
    /// Missing keys fall back to the conventional folders; `false` disables a
    /// testing type.
    pub fn spec_folders(&self) -> SpecFolders {
        SpecFolders {
            integration: folder_option(self.get("integrationFolder"), DEFAULT_INTEGRATION_FOLDER),
            component: folder_option(self.get("componentFolder"), DEFAULT_COMPONENT_FOLDER),
        }
    }
}

fn folder_option(value: Option<&Value>, default: &str) -> Option<String> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(true)) => Some(default.to_string()),
        Some(Value::Bool(false)) => None,
        Some(Value::String(folder)) => Some(folder.trim_end_matches('/').to_string()),
        Some(_) => Some(default.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
