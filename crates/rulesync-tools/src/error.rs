//! Error types for rulesync-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] rulesync_fs::Error),

    #[error("Front matter serialization failed: {0}")]
    FrontMatter(#[from] serde_yaml::Error),

    #[error("No Markdown files to sync for {tool}")]
    NoSources { tool: String },

    #[error("{failed} of {total} files failed to sync for {tool}")]
    FilesFailed {
        tool: String,
        failed: usize,
        total: usize,
    },
}
