//! Error types for rulesync-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from rulesync-core
    #[error(transparent)]
    Core(#[from] rulesync_core::Error),

    /// Error from rulesync-meta
    #[error(transparent)]
    Meta(#[from] rulesync_meta::Error),

    /// Error from rulesync-watch
    #[error(transparent)]
    Watch(#[from] rulesync_watch::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
