use std::path::Path;

use crate::app::api;
use crate::domain::{AppError, TestingType};

pub fn run_specs(root: &Path, json: bool) -> Result<(), AppError> {
    let preview = api::preview_specs_at(root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    if preview.is_empty() {
        println!("No spec files found");
        return Ok(());
    }

    let rows = api::annotate_specs(&preview);
    for testing_type in TestingType::ALL {
        let lines: Vec<String> = rows
            .iter()
            .filter(|row| row.testing_type == testing_type)
            .map(|row| row.display_line())
            .collect();
        if lines.is_empty() {
            continue;
        }
        println!("{} specs:", testing_type);
        for line in lines {
            println!("  {}", line);
        }
    }
    Ok(())
}
