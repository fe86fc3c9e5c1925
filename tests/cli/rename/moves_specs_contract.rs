use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rename_with_yes_moves_immediate_specs() {
    let ctx = TestContext::new();
    ctx.write_specs(&[
        "cypress/integration/login.spec.js",
        "cypress/integration/signup-spec.ts",
        "cypress/integration/nested/deep.spec.js",
    ]);

    ctx.cli()
        .args(["rename", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "cypress/integration/login.spec.js -> cypress/e2e/login.cy.js",
        ))
        .stdout(predicate::str::contains("Renamed 2 spec file(s)"));

    ctx.assert_file_exists("cypress/e2e/login.cy.js");
    ctx.assert_file_exists("cypress/e2e/signup.cy.ts");
    ctx.assert_not_exists("cypress/integration/login.spec.js");
    ctx.assert_file_exists("cypress/integration/nested/deep.spec.js");
}

#[test]
fn rename_accepts_explicit_dir() {
    let ctx = TestContext::new();
    ctx.write_specs(&["cypress/component/Card.spec.jsx"]);

    ctx.cli().args(["rename", "--dir", "cypress/component", "--yes"]).assert().success();

    ctx.assert_file_exists("cypress/component/Card.cy.jsx");
}

#[test]
fn rename_of_missing_dir_fails() {
    let ctx = TestContext::new();

    ctx.cli().args(["rename", "--yes"]).assert().failure().stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn rename_rejects_dir_outside_project() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["rename", "--dir", "../elsewhere", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path traversal detected"));
}

#[test]
fn rename_refuses_colliding_targets() {
    let ctx = TestContext::new();
    ctx.write_file("cypress/integration/a.spec.js", "FIRST");
    ctx.write_file("cypress/integration/a_spec.js", "SECOND");

    ctx.cli()
        .args(["rename", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("would both be renamed to cypress/e2e/a.cy.js"));

    assert_eq!(ctx.read_file("cypress/integration/a.spec.js"), "FIRST");
    assert_eq!(ctx.read_file("cypress/integration/a_spec.js"), "SECOND");
    ctx.assert_not_exists("cypress/e2e/a.cy.js");
}
