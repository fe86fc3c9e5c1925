use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn schema_prints_project_like_interface() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("interface ProjectLike {\n"))
        .stdout(predicate::str::contains("  projectId: String\n"))
        .stdout(predicate::str::contains("  projectRoot: String!\n"))
        .stdout(predicate::str::contains("  title: String!\n"))
        .stdout(predicate::str::contains("type CurrentProject implements ProjectLike {"))
        .stdout(predicate::str::contains("type GlobalProject implements ProjectLike {"));
}
