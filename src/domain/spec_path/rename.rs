use std::sync::LazyLock;

use regex::Regex;

/// Legacy spec suffix (`.spec.`, `_spec.`, `-Spec.`) or a bare dot, directly before a
/// script extension.
static SPEC_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[._-]?[sS]pec\.|\.)(?<ext>[jt]sx?)").expect("spec suffix pattern is valid")
});

/// Folder segment replaced by the migration.
const LEGACY_E2E_SEGMENT: &str = "integration";
const MIGRATED_E2E_SEGMENT: &str = "e2e";

/// Compute the migrated path of a legacy spec file.
///
/// Only the first occurrence of each rule is rewritten:
/// `cypress/integration/foo.spec.js` becomes `cypress/e2e/foo.cy.js`.
pub fn rename_spec_path(spec: &str) -> String {
    let renamed = spec.replacen(LEGACY_E2E_SEGMENT, MIGRATED_E2E_SEGMENT, 1);
    SPEC_SUFFIX.replace(&renamed, ".cy.${ext}").into_owned()
}
