//! Error types for rulesync-core

use std::path::PathBuf;

/// Result type for rulesync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a sync or validation run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured input directory does not exist
    #[error("Input directory not found: {path}")]
    MissingInput { path: PathBuf },

    /// Configuration could not be loaded
    #[error(transparent)]
    Meta(#[from] rulesync_meta::Error),
}
