use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Confirm, Error as DialoguerError};

use crate::app::api;
use crate::domain::AppError;

pub fn run_rename(root: &Path, dir: Option<String>, yes: bool) -> Result<(), AppError> {
    let dir = match dir {
        Some(dir) => dir,
        None => api::default_rename_dir_at(root)?,
    };

    let planned = api::plan_rename_at(root, &dir)?;
    if planned.is_empty() {
        println!("No spec files to rename in {}", dir);
        return Ok(());
    }

    for spec_move in &planned {
        println!("  {} -> {}", spec_move.from, spec_move.to);
    }

    if !yes && !confirm_rename(planned.len())? {
        println!("Rename cancelled");
        return Ok(());
    }

    let moves = api::rename_specs_at(root, &dir)?;
    println!("✅ Renamed {} spec file(s)", moves.len());
    Ok(())
}

fn confirm_rename(count: usize) -> Result<bool, AppError> {
    match Confirm::new()
        .with_prompt(format!("Rename {} spec file(s)?", count))
        .default(false)
        .interact()
    {
        Ok(confirmed) => Ok(confirmed),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::Prompt(err.to_string())),
    }
}
