use std::path::Path;

use crate::app::api::{self, MigrateConfigOptions};
use crate::domain::{AppError, ModuleFlavor};

pub fn run_config(
    root: &Path,
    config: Option<String>,
    esm: bool,
    write: bool,
) -> Result<(), AppError> {
    let options = MigrateConfigOptions {
        legacy_config: config,
        flavor: esm.then_some(ModuleFlavor::Esm),
        write,
    };
    let outcome = api::migrate_config_at(root, options)?;

    if outcome.written {
        println!("✅ Wrote {}", outcome.output_file);
    } else {
        print!("{}", outcome.source);
    }
    Ok(())
}
