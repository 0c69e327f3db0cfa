//! Domain-specific errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to write the shell export line to its sink.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export to {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure of a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access path store {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid path store contents in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("failed to encode path store: {0}")]
    Encode(String),
    #[error("{0} is read-only")]
    ReadOnly(String),
}

/// Errors surfaced to the action dispatcher. None of them end the session.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
