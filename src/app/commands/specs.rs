//! Before/after preview of the spec-file migration.

use std::panic;
use std::thread;

use serde::Serialize;

use crate::domain::spec_path::render_parts;
use crate::domain::{AppError, FilePart, RelativeSpecWithTestingType, SpecPattern, TestingType};
use crate::ports::ProjectFilesystem;

/// Legacy specs and their migrated paths, index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecsPreview {
    pub before: Vec<RelativeSpecWithTestingType>,
    pub after: Vec<RelativeSpecWithTestingType>,
}

impl SpecsPreview {
    pub fn len(&self) -> usize {
        self.before.len()
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_empty()
    }

    pub fn of_type(
        &self,
        testing_type: TestingType,
    ) -> impl Iterator<Item = &RelativeSpecWithTestingType> {
        self.before.iter().filter(move |spec| spec.testing_type == testing_type)
    }
}

/// One preview row split into highlight fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedSpec {
    pub testing_type: TestingType,
    pub before: Vec<FilePart>,
    pub after: Vec<FilePart>,
}

impl AnnotatedSpec {
    /// `before -> after` with highlighted fragments in brackets.
    pub fn display_line(&self) -> String {
        format!("{} -> {}", render_parts(&self.before), render_parts(&self.after))
    }
}

/// List the specs of both testing types and compute their migrated paths.
///
/// The two folders are listed concurrently. An absent folder contributes no
/// entries. Component specs precede e2e specs in the result.
pub fn get_specs<F: ProjectFilesystem + Sync>(
    project: &F,
    component_dir: Option<&str>,
    e2e_dir: Option<&str>,
) -> Result<SpecsPreview, AppError> {
    let (component, e2e) = thread::scope(|scope| {
        let component =
            scope.spawn(|| list_specs(project, component_dir, TestingType::Component));
        let e2e = scope.spawn(|| list_specs(project, e2e_dir, TestingType::E2e));
        (
            component.join().unwrap_or_else(|payload| panic::resume_unwind(payload)),
            e2e.join().unwrap_or_else(|payload| panic::resume_unwind(payload)),
        )
    });

    let before: Vec<RelativeSpecWithTestingType> = component?.into_iter().chain(e2e?).collect();
    let after = before.iter().map(RelativeSpecWithTestingType::migrated).collect();

    Ok(SpecsPreview { before, after })
}

fn list_specs<F: ProjectFilesystem>(
    project: &F,
    dir: Option<&str>,
    testing_type: TestingType,
) -> Result<Vec<RelativeSpecWithTestingType>, AppError> {
    let Some(dir) = dir else {
        return Ok(Vec::new());
    };
    let files = project.list_files(dir, true)?;
    tracing::debug!(dir, count = files.len(), %testing_type, "Listed spec folder");
    Ok(files.into_iter().map(|path| RelativeSpecWithTestingType::new(path, testing_type)).collect())
}

/// Split every preview row into highlight fragments.
///
/// Paths that are not recognized spec files are kept as a single plain part.
pub fn annotate_preview(preview: &SpecsPreview) -> Vec<AnnotatedSpec> {
    preview
        .before
        .iter()
        .zip(&preview.after)
        .map(|(before, after)| AnnotatedSpec {
            testing_type: before.testing_type,
            before: annotate_or_plain(SpecPattern::legacy(), &before.relative),
            after: annotate_or_plain(SpecPattern::migrated(), &after.relative),
        })
        .collect()
}

fn annotate_or_plain(pattern: &SpecPattern, path: &str) -> Vec<FilePart> {
    match pattern.annotate(path) {
        Ok(parts) => parts,
        Err(err) => {
            tracing::warn!("{}", err);
            vec![FilePart { text: path.to_string(), highlight: false }]
        }
    }
}
