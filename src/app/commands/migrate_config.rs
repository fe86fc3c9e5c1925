//! Conversion of the legacy `cypress.json` into a config module.

use crate::app::config::{load_legacy_config, load_settings};
use crate::domain::config::create_config_string;
use crate::domain::{AppError, ModuleFlavor};
use crate::ports::ProjectFilesystem;

#[derive(Debug, Clone, Default)]
pub struct MigrateConfigOptions {
    /// Legacy config path; overrides `migration.legacy_config`.
    pub legacy_config: Option<String>,
    /// Module flavor; overrides `migration.flavor`.
    pub flavor: Option<ModuleFlavor>,
    /// Write the module next to the legacy config instead of only returning it.
    pub write: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateConfigOutcome {
    pub source: String,
    pub output_file: String,
    pub written: bool,
}

pub fn execute<F: ProjectFilesystem>(
    project: &F,
    options: MigrateConfigOptions,
) -> Result<MigrateConfigOutcome, AppError> {
    let mut settings = load_settings(project)?;
    if let Some(flavor) = options.flavor {
        settings.flavor = flavor;
    }
    let legacy_path = options.legacy_config.unwrap_or_else(|| settings.legacy_config.clone());

    let legacy = load_legacy_config(project, &legacy_path)?;
    let source = create_config_string(&legacy, &settings.module_options())?;
    let output_file = settings.output_file().to_string();

    if options.write {
        if project.file_exists(&output_file) {
            return Err(AppError::OutputExists(output_file));
        }
        project.write_file(&output_file, &source)?;
        tracing::info!(legacy = %legacy_path, output = %output_file, "Wrote config module");
    }

    Ok(MigrateConfigOutcome { source, output_file, written: options.write })
}
