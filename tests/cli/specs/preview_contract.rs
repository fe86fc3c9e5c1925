use crate::harness::TestContext;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn specs_prints_highlighted_preview() {
    let ctx = TestContext::new();
    ctx.write_specs(&[
        "cypress/integration/login.spec.js",
        "cypress/integration/admin/users_spec.ts",
        "cypress/component/Button.spec.tsx",
    ]);

    ctx.cli()
        .arg("specs")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "component specs:\n  cypress/[component]/Button[.spec.]tsx -> cypress/[component]/Button[.cy.]tsx\n",
        ))
        .stdout(predicate::str::contains(
            "  cypress/[integration]/admin/users[_spec.]ts -> cypress/[e2e]/admin/users[.cy.]ts\n",
        ))
        .stdout(predicate::str::contains(
            "  cypress/[integration]/login[.spec.]js -> cypress/[e2e]/login[.cy.]js\n",
        ));
}

#[test]
fn specs_reports_empty_project() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("specs")
        .assert()
        .success()
        .stdout(predicate::str::contains("No spec files found"));
}

#[test]
fn specs_json_keeps_before_and_after_aligned() {
    let ctx = TestContext::with_legacy_config(r#"{"componentFolder": false}"#);
    ctx.write_specs(&["cypress/integration/a.spec.js", "cypress/component/B.spec.jsx"]);

    let output = ctx.cli().args(["specs", "--json"]).output().expect("run cymig specs --json");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let before = value["before"].as_array().expect("before array");
    let after = value["after"].as_array().expect("after array");

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 1);
    assert_eq!(before[0]["relative"], "cypress/integration/a.spec.js");
    assert_eq!(before[0]["testingType"], "e2e");
    assert_eq!(after[0]["relative"], "cypress/e2e/a.cy.js");
    assert_eq!(after[0]["testingType"], "e2e");
}
