use crate::harness::TestContext;
use cymig::api::{self, MigrateConfigOptions, TestingType};

#[test]
fn public_api_migration_happy_path_contract() {
    let ctx = TestContext::with_legacy_config(
        r#"{"baseUrl": "http://localhost:3000", "integrationFolder": "cypress/integration"}"#,
    );
    ctx.write_specs(&["cypress/integration/home.spec.js", "cypress/component/Nav.spec.tsx"]);

    let outcome = api::migrate_config_at(
        ctx.work_dir(),
        MigrateConfigOptions { write: true, ..Default::default() },
    )
    .expect("config migration failed");
    assert!(outcome.written);
    assert!(outcome.source.contains("  integrationFolder: 'cypress/integration',\n"));
    ctx.assert_file_exists("cypress.config.js");

    let preview = api::preview_specs_at(ctx.work_dir()).expect("preview failed");
    assert_eq!(preview.len(), 2);
    assert_eq!(preview.of_type(TestingType::Component).count(), 1);
    assert_eq!(preview.before[0].relative, "cypress/component/Nav.spec.tsx");
    assert_eq!(preview.after[1].relative, "cypress/e2e/home.cy.js");

    let planned = api::plan_rename_at(ctx.work_dir(), "cypress/integration").expect("plan failed");
    assert_eq!(planned.len(), 1);
    ctx.assert_file_exists("cypress/integration/home.spec.js");

    let moves = api::rename_specs_at(ctx.work_dir(), "cypress/integration").expect("rename failed");
    assert_eq!(moves, planned);
    ctx.assert_file_exists("cypress/e2e/home.cy.js");

    assert!(api::schema_sdl().contains("interface ProjectLike"));
}
