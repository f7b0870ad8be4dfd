//! Error types for versync-sync.

use std::path::PathBuf;

use thiserror::Error;

use versync_core::{LayoutError, ManifestRole};

/// All errors that can arise from a sync run.
///
/// Every variant is fatal: the pipeline stops at the first error and does
/// not roll back files already written.
#[derive(Debug, Error)]
pub enum SyncError {
    /// One of the three files does not exist at its expected path.
    #[error("{role} not found at {path}")]
    FileNotFound { role: ManifestRole, path: PathBuf },

    /// A JSON file could not be parsed.
    #[error("failed to parse {role} at {path}: {source}")]
    Parse {
        role: ManifestRole,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON file parsed, but its root is not an object.
    #[error("{role} at {path} is not a JSON object")]
    NotAnObject { role: ManifestRole, path: PathBuf },

    /// The authoritative manifest has no usable version field.
    #[error("no `{field}` field in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    /// The version field exists but is not a string.
    #[error("`{field}` in {path} must be a string, found {found}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        found: &'static str,
    },

    /// The line-oriented file has no line matching the version pattern.
    #[error("no line matching `{pattern}` in {path}")]
    PatternNotFound { path: PathBuf, pattern: String },

    /// A dependent file is marked read-only.
    #[error("{path} is read-only")]
    ReadOnly { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error while rendering the structured file.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The project root could not be resolved.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

impl SyncError {
    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            SyncError::FileNotFound { .. } => 2,
            SyncError::Parse { .. } | SyncError::NotAnObject { .. } => 3,
            SyncError::MissingField { .. } | SyncError::InvalidField { .. } => 4,
            SyncError::PatternNotFound { .. } => 5,
            SyncError::ReadOnly { .. } => 6,
            SyncError::Layout(LayoutError::RootNotFound { .. }) => 2,
            SyncError::Io { .. } | SyncError::Json(_) | SyncError::Layout(_) => 1,
        }
    }
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
