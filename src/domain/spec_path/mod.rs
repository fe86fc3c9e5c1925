//! Spec-file naming conventions: the rename rule and the highlight annotator.

mod pattern;
mod rename;

use serde::Serialize;

use crate::domain::TestingType;

pub use pattern::{DIR_GROUP, EXT_GROUP, FilePart, SpecPattern, render_parts};
pub use rename::rename_spec_path;

/// A spec path relative to the project root, tagged with its suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelativeSpecWithTestingType {
    pub relative: String,
    pub testing_type: TestingType,
}

impl RelativeSpecWithTestingType {
    pub fn new(relative: impl Into<String>, testing_type: TestingType) -> Self {
        Self { relative: relative.into(), testing_type }
    }

    /// The same spec under the migrated naming convention.
    pub fn migrated(&self) -> Self {
        Self { relative: rename_spec_path(&self.relative), testing_type: self.testing_type }
    }
}
