//! Shared testing harness for `cymig` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with an empty project directory.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create a project seeded with a `cypress.json`.
    pub(crate) fn with_legacy_config(content: &str) -> Self {
        let ctx = Self::new();
        ctx.write_file("cypress.json", content);
        ctx
    }

    /// Path to the project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute path of a project-relative file.
    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Write a project-relative file, creating parent directories.
    pub(crate) fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
    }

    /// Seed empty spec files.
    pub(crate) fn write_specs(&self, relatives: &[&str]) {
        for relative in relatives {
            self.write_file(relative, "describe('spec', () => {})\n");
        }
    }

    /// Read a project-relative file.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read project file")
    }

    /// Build a command for invoking the compiled `cymig` binary within the project.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `cymig` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("cymig").expect("Failed to locate cymig binary");
        cmd.current_dir(dir.as_ref()).env_remove("CYMIG_LOG");
        cmd
    }

    /// Assert that a project-relative file exists.
    pub(crate) fn assert_file_exists(&self, relative: &str) {
        assert!(self.path(relative).is_file(), "{} should exist", relative);
    }

    /// Assert that a project-relative path does not exist.
    pub(crate) fn assert_not_exists(&self, relative: &str) {
        assert!(!self.path(relative).exists(), "{} should not exist", relative);
    }
}
