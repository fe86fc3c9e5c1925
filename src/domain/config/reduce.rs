//! Reduction of a flat legacy config into global / e2e / component buckets.

use serde::Serialize;
use serde_json::{Map, Value};

use super::legacy::LegacyConfig;
use crate::domain::TestingType;

/// One of the three option groups of a migrated config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Global,
    Testing(TestingType),
}

/// Where a legacy key lands in the reduced config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Discard the key.
    Drop,
    /// The value is an object whose entries merge into the bucket.
    MergeInto(TestingType),
    /// Copy the value under `key` into every listed testing bucket.
    FanOut { key: &'static str, targets: &'static [TestingType] },
    /// Copy the value under `key` into one bucket.
    Place { bucket: Bucket, key: &'static str },
    /// Keep the key unchanged in the global bucket.
    Global,
}

/// Keys with special handling. Anything not listed here is global.
pub const KEY_RULES: &[(&str, Placement)] = &[
    ("pluginsFile", Placement::Drop),
    ("$schema", Placement::Drop),
    ("componentFolder", Placement::Drop),
    ("e2e", Placement::MergeInto(TestingType::E2e)),
    ("component", Placement::MergeInto(TestingType::Component)),
    (
        "testFiles",
        Placement::FanOut {
            key: "specPattern",
            targets: &[TestingType::E2e, TestingType::Component],
        },
    ),
    ("baseUrl", Placement::Place { bucket: Bucket::Testing(TestingType::E2e), key: "baseUrl" }),
];

/// Look up the placement of a legacy key.
pub fn placement_for(key: &str) -> Placement {
    KEY_RULES
        .iter()
        .find(|(rule_key, _)| *rule_key == key)
        .map(|(_, placement)| *placement)
        .unwrap_or(Placement::Global)
}

/// Options grouped into the three buckets of a migrated config.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigOptions {
    pub global: Map<String, Value>,
    pub e2e: Map<String, Value>,
    pub component: Map<String, Value>,
}

impl ConfigOptions {
    pub fn bucket(&self, bucket: Bucket) -> &Map<String, Value> {
        match bucket {
            Bucket::Global => &self.global,
            Bucket::Testing(TestingType::E2e) => &self.e2e,
            Bucket::Testing(TestingType::Component) => &self.component,
        }
    }

    pub fn testing(&self, testing_type: TestingType) -> &Map<String, Value> {
        self.bucket(Bucket::Testing(testing_type))
    }

    fn bucket_mut(&mut self, bucket: Bucket) -> &mut Map<String, Value> {
        match bucket {
            Bucket::Global => &mut self.global,
            Bucket::Testing(TestingType::E2e) => &mut self.e2e,
            Bucket::Testing(TestingType::Component) => &mut self.component,
        }
    }

    /// Insert a value, shallow-merging into an existing object value.
    fn merge(&mut self, bucket: Bucket, key: &str, value: &Value) {
        let target = self.bucket_mut(bucket);
        if let (Some(Value::Object(existing)), Value::Object(incoming)) = (target.get_mut(key), value)
        {
            for (k, v) in incoming {
                existing.insert(k.clone(), v.clone());
            }
            return;
        }
        target.insert(key.to_string(), value.clone());
    }
}

/// Reduce a legacy config key by key, in file order.
pub fn reduce_config(config: &LegacyConfig) -> ConfigOptions {
    let mut options = ConfigOptions::default();

    for (key, value) in config.options() {
        match placement_for(key) {
            Placement::Drop => {}
            Placement::MergeInto(testing_type) => match value {
                Value::Object(entries) => {
                    for (k, v) in entries {
                        options.merge(Bucket::Testing(testing_type), k, v);
                    }
                }
                other => {
                    tracing::warn!(
                        "Ignoring non-object value for '{}': {}",
                        key,
                        serde_json::to_string(other).unwrap_or_default()
                    );
                }
            },
            Placement::FanOut { key: target_key, targets } => {
                for testing_type in targets {
                    options.merge(Bucket::Testing(*testing_type), target_key, value);
                }
            }
            Placement::Place { bucket, key: target_key } => {
                options.merge(bucket, target_key, value);
            }
            Placement::Global => options.merge(Bucket::Global, key, value),
        }
    }

    tracing::debug!(
        global = options.global.len(),
        e2e = options.e2e.len(),
        component = options.component.len(),
        "Reduced legacy config"
    );
    options
}
