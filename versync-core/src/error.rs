//! Error types for versync-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can arise while resolving the project layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The project root does not exist or is not a directory.
    #[error("project root not found at {path}")]
    RootNotFound { path: PathBuf },

    /// Underlying I/O failure while resolving the root (permission denied, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
