//! GraphQL schema declarations for the project object model.

mod project_like;

pub use project_like::{
    CurrentProject, FieldDecl, GlobalProject, PROJECT_LIKE_FIELDS, PROJECT_LIKE_INTERFACE,
    ProjectLike, ProjectShape, ProjectVariant, project_like_sdl,
};
