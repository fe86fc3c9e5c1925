use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PROJECT_LIKE_INTERFACE: &str = "ProjectLike";

/// A field of a GraphQL object or interface type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub type_name: &'static str,
    pub non_null: bool,
    pub description: &'static str,
}

impl FieldDecl {
    /// Type reference as written in SDL (`String!`).
    pub fn type_ref(&self) -> String {
        if self.non_null { format!("{}!", self.type_name) } else { self.type_name.to_string() }
    }
}

/// Fields shared by every concrete project type.
pub const PROJECT_LIKE_FIELDS: [FieldDecl; 3] = [
    FieldDecl {
        name: "projectId",
        type_name: "String",
        non_null: false,
        description: "Cloud project identifier",
    },
    FieldDecl {
        name: "projectRoot",
        type_name: "String",
        non_null: true,
        description: "Absolute path to the project on disk",
    },
    FieldDecl {
        name: "title",
        type_name: "String",
        non_null: true,
        description: "Display name, the last segment of the project root",
    },
];

/// Backing shape handed to the schema engine for a `ProjectLike` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectShape {
    pub project_id: Option<String>,
    pub project_root: String,
    pub title: String,
}

/// Field resolution for anything exposed through the `ProjectLike` interface.
pub trait ProjectLike {
    fn project_root(&self) -> &str;

    /// Not wired to the cloud project yet; always `None`.
    fn project_id(&self) -> Option<String> {
        None
    }

    fn title(&self) -> String {
        Path::new(self.project_root())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn to_shape(&self) -> ProjectShape {
        ProjectShape {
            project_id: self.project_id(),
            project_root: self.project_root().to_string(),
            title: self.title(),
        }
    }

    /// Resolve an interface field by its schema name.
    fn resolve_field(&self, field: &str) -> Option<Value> {
        match field {
            "projectId" => Some(self.project_id().map(Value::String).unwrap_or(Value::Null)),
            "projectRoot" => Some(Value::String(self.project_root().to_string())),
            "title" => Some(Value::String(self.title())),
            _ => None,
        }
    }
}

/// The project currently open in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentProject {
    pub project_root: String,
}

/// A project listed in the global (launchpad) mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalProject {
    pub project_root: String,
}

impl ProjectLike for CurrentProject {
    fn project_root(&self) -> &str {
        &self.project_root
    }
}

impl ProjectLike for GlobalProject {
    fn project_root(&self) -> &str {
        &self.project_root
    }
}

/// Concrete types implementing `ProjectLike`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectVariant {
    Current(CurrentProject),
    Global(GlobalProject),
}

impl ProjectVariant {
    pub const TYPE_NAMES: [&'static str; 2] = ["CurrentProject", "GlobalProject"];

    /// Concrete GraphQL type name of this value.
    pub fn resolve_type(&self) -> &'static str {
        match self {
            ProjectVariant::Current(_) => "CurrentProject",
            ProjectVariant::Global(_) => "GlobalProject",
        }
    }
}

impl ProjectLike for ProjectVariant {
    fn project_root(&self) -> &str {
        match self {
            ProjectVariant::Current(project) => project.project_root(),
            ProjectVariant::Global(project) => project.project_root(),
        }
    }
}

/// SDL for the `ProjectLike` interface.
pub fn project_like_sdl() -> String {
    let mut sdl = format!("interface {PROJECT_LIKE_INTERFACE} {{\n");
    for field in &PROJECT_LIKE_FIELDS {
        sdl.push_str(&format!("  \"{}\"\n  {}: {}\n", field.description, field.name, field.type_ref()));
    }
    sdl.push_str("}\n");
    for type_name in ProjectVariant::TYPE_NAMES {
        sdl.push_str(&format!("\ntype {type_name} implements {PROJECT_LIKE_INTERFACE} {{\n"));
        for field in &PROJECT_LIKE_FIELDS {
            sdl.push_str(&format!("  {}: {}\n", field.name, field.type_ref()));
        }
        sdl.push_str("}\n");
    }
    sdl
}
