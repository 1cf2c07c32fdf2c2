//! Error types for rulesync-fs

use std::path::PathBuf;

/// Result type for rulesync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rulesync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source file is missing or unreadable: {path}")]
    SourceUnreadable { path: PathBuf },

    #[error("Destination already exists: {path}")]
    DestinationExists { path: PathBuf },

    #[error("Destination {path} exists but is not a file")]
    DestinationConflict { path: PathBuf },

    #[error("Destination {path} is the source file itself")]
    SourceIsDestination { path: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
