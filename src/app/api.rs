//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together store creation
//! and command execution. Every `*_at` function takes the project root.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemStore;
use crate::app::commands::{migrate_config, rename, specs};
use crate::app::config::{load_legacy_config_or_default, load_settings};
use crate::domain::config::SpecFolders;
use crate::domain::schema;
use crate::ports::ProjectFilesystem;

pub use crate::app::commands::migrate_config::{MigrateConfigOptions, MigrateConfigOutcome};
pub use crate::app::commands::rename::SpecMove;
pub use crate::app::commands::specs::{AnnotatedSpec, SpecsPreview};
pub use crate::domain::{AppError, ModuleFlavor, TestingType};

/// Create a store for a project root.
fn create_store(root: impl AsRef<Path>) -> Result<FilesystemStore, AppError> {
    let root = root.as_ref();
    let canonical = root.canonicalize().map_err(|err| {
        AppError::InvalidPath(format!("Project root {} is not accessible: {}", root.display(), err))
    })?;
    if !canonical.is_dir() {
        return Err(AppError::InvalidPath(format!(
            "Project root {} is not a directory",
            canonical.display()
        )));
    }
    Ok(FilesystemStore::new(canonical))
}

fn current_dir() -> Result<PathBuf, AppError> {
    Ok(std::env::current_dir()?)
}

/// Spec folders declared by the project's legacy config, limited to those on disk.
fn existing_spec_folders<F: ProjectFilesystem>(project: &F) -> Result<SpecFolders, AppError> {
    let settings = load_settings(project)?;
    let legacy = load_legacy_config_or_default(project, &settings.legacy_config)?;
    let folders = legacy.spec_folders();

    let keep = |folder: Option<String>| {
        folder.filter(|dir| {
            let present = project.is_dir(dir);
            if !present {
                tracing::debug!(dir = %dir, "Spec folder not found, treating as absent");
            }
            present
        })
    };

    Ok(SpecFolders { integration: keep(folders.integration), component: keep(folders.component) })
}

// =============================================================================
// Config Migration API
// =============================================================================

/// Generate the config module for the project in the current directory.
pub fn migrate_config(options: MigrateConfigOptions) -> Result<MigrateConfigOutcome, AppError> {
    migrate_config_at(current_dir()?, options)
}

/// Generate the config module for the project at `root`.
pub fn migrate_config_at(
    root: impl AsRef<Path>,
    options: MigrateConfigOptions,
) -> Result<MigrateConfigOutcome, AppError> {
    let store = create_store(root)?;
    migrate_config::execute(&store, options)
}

// =============================================================================
// Spec Preview API
// =============================================================================

/// Preview the spec migration for the project in the current directory.
pub fn preview_specs() -> Result<SpecsPreview, AppError> {
    preview_specs_at(current_dir()?)
}

/// Preview the spec migration for the project at `root`.
pub fn preview_specs_at(root: impl AsRef<Path>) -> Result<SpecsPreview, AppError> {
    let store = create_store(root)?;
    let folders = existing_spec_folders(&store)?;
    specs::get_specs(&store, folders.component.as_deref(), folders.integration.as_deref())
}

/// Preview rows split into highlight fragments.
pub fn annotate_specs(preview: &SpecsPreview) -> Vec<AnnotatedSpec> {
    specs::annotate_preview(preview)
}

// =============================================================================
// Spec Rename API
// =============================================================================

/// Directory whose files are renamed when none is given: the integration folder.
pub fn default_rename_dir_at(root: impl AsRef<Path>) -> Result<String, AppError> {
    let store = create_store(root)?;
    let settings = load_settings(&store)?;
    let legacy = load_legacy_config_or_default(&store, &settings.legacy_config)?;
    legacy.spec_folders().integration.ok_or_else(|| {
        AppError::InvalidPath("integrationFolder is disabled; pass a directory explicitly".into())
    })
}

/// Compute the moves for `dir` without touching disk.
pub fn plan_rename_at(root: impl AsRef<Path>, dir: &str) -> Result<Vec<SpecMove>, AppError> {
    let store = create_store(root)?;
    rename::plan_spec_moves(&store, dir)
}

/// Rename the spec files of `dir` in the current directory's project.
pub fn rename_specs(dir: &str) -> Result<Vec<SpecMove>, AppError> {
    rename_specs_at(current_dir()?, dir)
}

/// Rename the spec files of `dir` in the project at `root`.
pub fn rename_specs_at(root: impl AsRef<Path>, dir: &str) -> Result<Vec<SpecMove>, AppError> {
    let store = create_store(root)?;
    rename::move_spec_files(&store, dir)
}

// =============================================================================
// Schema API
// =============================================================================

/// SDL text of the `ProjectLike` interface.
pub fn schema_sdl() -> String {
    schema::project_like_sdl()
}
