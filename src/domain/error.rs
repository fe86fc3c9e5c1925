use std::io;

use thiserror::Error;

/// Library-wide error type for cymig operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Path does not have the shape of a spec file for the given pattern.
    #[error("'{path}' is not a spec file for this pattern")]
    NonSpecFile { path: String },

    /// Legacy configuration file missing.
    #[error("Legacy config not found: {0}")]
    ConfigNotFound(String),

    /// Output file already exists and would be overwritten.
    #[error("{0} already exists")]
    OutputExists(String),

    /// A spec move would replace a file that is already there.
    #[error("Rename target {0} already exists")]
    RenameTargetExists(String),

    /// Two spec files migrate to the same path.
    #[error("{first} and {second} would both be renamed to {target}")]
    ConflictingRenames { target: String, first: String, second: String },

    /// Legacy configuration parsed but has the wrong shape.
    #[error("Invalid legacy config: {0}")]
    InvalidLegacyConfig(String),

    /// A path could not be used as given.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Path escapes the project root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Spec pattern could not be compiled.
    #[error("Invalid spec pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Glob pattern could not be compiled.
    #[error("Invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    /// Glob walk hit an unreadable entry.
    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    /// Config module template failed to render.
    #[error("Failed to render config module: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    pub fn non_spec_file<S: Into<String>>(path: S) -> Self {
        AppError::NonSpecFile { path: path.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Glob(err) => err.error().kind(),
            AppError::NonSpecFile { .. }
            | AppError::InvalidLegacyConfig(_)
            | AppError::InvalidPath(_)
            | AppError::PathTraversal(_)
            | AppError::JsonParseError(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidPattern(_)
            | AppError::GlobPattern(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
            AppError::OutputExists(_)
            | AppError::RenameTargetExists(_)
            | AppError::ConflictingRenames { .. } => io::ErrorKind::AlreadyExists,
            AppError::Prompt(_) | AppError::Template(_) => io::ErrorKind::Other,
        }
    }
}
