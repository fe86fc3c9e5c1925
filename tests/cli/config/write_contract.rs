use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn config_write_creates_module_file() {
    let ctx = TestContext::with_legacy_config(r#"{"component": {"viewportWidth": 500}}"#);

    ctx.cli()
        .args(["config", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote cypress.config.js"));

    let written = ctx.read_file("cypress.config.js");
    assert!(written.starts_with("const { defineConfig } = require('cypress')"));
    assert!(written.contains("  component: {\n"));
    assert!(written.contains("    viewportWidth: 500,\n"));
    assert!(!written.contains("  e2e: {"));
}

#[test]
fn config_write_refuses_to_overwrite() {
    let ctx = TestContext::with_legacy_config("{}");
    ctx.write_file("cypress.config.js", "// hand written\n");

    ctx.cli()
        .args(["config", "--write"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.read_file("cypress.config.js"), "// hand written\n");
}

#[test]
fn config_write_uses_settings_output() {
    let ctx = TestContext::with_legacy_config(r#"{"video": true}"#);
    ctx.write_file("cymig.toml", "[migration]\noutput = \"config/cypress.config.js\"\n");

    ctx.cli().args(["config", "--write"]).assert().success();

    ctx.assert_file_exists("config/cypress.config.js");
    ctx.assert_not_exists("cypress.config.js");
}

#[test]
fn unknown_settings_keys_are_rejected() {
    let ctx = TestContext::with_legacy_config("{}");
    ctx.write_file("cymig.toml", "[migration]\nflavour = \"esm\"\n");

    ctx.cli()
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}
