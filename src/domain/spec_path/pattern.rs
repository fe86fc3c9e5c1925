use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::AppError;

/// Capture group naming the folder segment that changes.
pub const DIR_GROUP: &str = "dir";
/// Capture group naming the suffix/extension boundary that changes.
pub const EXT_GROUP: &str = "ext";

static LEGACY: LazyLock<SpecPattern> = LazyLock::new(|| {
    SpecPattern::new(r"cypress/(?<dir>integration|component)/.*?(?<ext>[._-]?[sS]pec\.|\.)[jt]sx?")
        .expect("legacy spec pattern is valid")
});

static MIGRATED: LazyLock<SpecPattern> = LazyLock::new(|| {
    SpecPattern::new(r"cypress/(?<dir>e2e|component)/.*?(?<ext>\.cy\.)[jt]sx?")
        .expect("migrated spec pattern is valid")
});

/// A fragment of a spec path, flagged when it differs between naming conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePart {
    pub text: String,
    pub highlight: bool,
}

impl FilePart {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), highlight: false }
    }

    fn highlighted(text: &str) -> Self {
        Self { text: text.to_string(), highlight: true }
    }
}

/// Pattern recognizing spec files and exposing the `dir` and `ext` groups.
#[derive(Debug, Clone)]
pub struct SpecPattern {
    regex: Regex,
}

impl SpecPattern {
    /// Compile a custom pattern. Annotation fails for patterns lacking `dir` or `ext`.
    pub fn new(pattern: &str) -> Result<Self, AppError> {
        Ok(Self { regex: Regex::new(pattern)? })
    }

    /// Pattern for pre-migration paths (`cypress/integration/foo.spec.js`).
    pub fn legacy() -> &'static SpecPattern {
        &LEGACY
    }

    /// Pattern for post-migration paths (`cypress/e2e/foo.cy.js`).
    pub fn migrated() -> &'static SpecPattern {
        &MIGRATED
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Split `path` into highlighted and plain fragments.
    ///
    /// Highlights are the spans of the `dir` and `ext` captures; captures of a
    /// single character (the bare `.` boundary) are left plain. Concatenating the
    /// returned texts reproduces `path`.
    pub fn annotate(&self, path: &str) -> Result<Vec<FilePart>, AppError> {
        let captures = self.regex.captures(path).ok_or_else(|| AppError::non_spec_file(path))?;
        let (Some(dir), Some(ext)) = (captures.name(DIR_GROUP), captures.name(EXT_GROUP)) else {
            return Err(AppError::non_spec_file(path));
        };

        let mut spans: Vec<(usize, usize)> = [dir, ext]
            .into_iter()
            .filter(|m| m.as_str().chars().count() > 1)
            .map(|m| (m.start(), m.end()))
            .collect();
        spans.sort_unstable();

        let mut parts = Vec::new();
        let mut cursor = 0;
        for (start, end) in spans {
            if start < cursor {
                continue;
            }
            if start > cursor {
                parts.push(FilePart::plain(&path[cursor..start]));
            }
            parts.push(FilePart::highlighted(&path[start..end]));
            cursor = end;
        }
        if cursor < path.len() {
            parts.push(FilePart::plain(&path[cursor..]));
        }

        Ok(parts)
    }
}

/// Render parts for a terminal, wrapping highlights in brackets.
pub fn render_parts(parts: &[FilePart]) -> String {
    parts
        .iter()
        .map(|part| {
            if part.highlight { format!("[{}]", part.text) } else { part.text.clone() }
        })
        .collect()
}
