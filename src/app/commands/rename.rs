//! Physical rename of legacy spec files.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{AppError, rename_spec_path};
use crate::ports::ProjectFilesystem;

/// A single spec move, paths relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecMove {
    pub from: String,
    pub to: String,
}

/// Compute the moves for the immediate files of `dir` without touching disk.
///
/// Files the rename rule leaves unchanged are left out. Fails when two files
/// map to the same target or a target is already taken.
pub fn plan_spec_moves<F: ProjectFilesystem>(
    project: &F,
    dir: &str,
) -> Result<Vec<SpecMove>, AppError> {
    let mut moves: Vec<SpecMove> = Vec::new();
    let mut sources_by_target: HashMap<String, String> = HashMap::new();

    for from in project.list_files(dir, false)? {
        let to = rename_spec_path(&from);
        if to == from {
            tracing::debug!(path = %from, "Spec path unchanged by migration");
            continue;
        }
        if let Some(first) = sources_by_target.get(&to) {
            return Err(AppError::ConflictingRenames {
                target: to,
                first: first.clone(),
                second: from,
            });
        }
        if project.file_exists(&to) {
            return Err(AppError::RenameTargetExists(to));
        }
        sources_by_target.insert(to.clone(), from.clone());
        moves.push(SpecMove { from, to });
    }

    Ok(moves)
}

/// Rename the immediate files of `dir` to their migrated paths, one at a time.
///
/// The first failing rename aborts the run; files moved before it stay moved.
pub fn move_spec_files<F: ProjectFilesystem>(
    project: &F,
    dir: &str,
) -> Result<Vec<SpecMove>, AppError> {
    let moves = plan_spec_moves(project, dir)?;
    for spec_move in &moves {
        project.rename(&spec_move.from, &spec_move.to)?;
        tracing::info!(from = %spec_move.from, to = %spec_move.to, "Moved spec file");
    }
    Ok(moves)
}
