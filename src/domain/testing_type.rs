use std::fmt;

use serde::{Deserialize, Serialize};

/// The two independent test suites a project can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestingType {
    /// Component tests, mounted in isolation.
    Component,
    /// End-to-end tests, driven through a running app.
    E2e,
}

impl TestingType {
    /// All testing types in output order.
    pub const ALL: [TestingType; 2] = [TestingType::Component, TestingType::E2e];

    /// Key used for this testing type in config modules.
    pub fn config_key(&self) -> &'static str {
        match self {
            TestingType::Component => "component",
            TestingType::E2e => "e2e",
        }
    }

    /// Parse a testing type from its config key.
    pub fn from_config_key(key: &str) -> Option<TestingType> {
        match key.to_lowercase().as_str() {
            "component" => Some(TestingType::Component),
            "e2e" => Some(TestingType::E2e),
            _ => None,
        }
    }
}

impl fmt::Display for TestingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.config_key())
    }
}
