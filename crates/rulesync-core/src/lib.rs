//! Orchestration layer for rulesync
//!
//! Sits between the CLI and the lower crates:
//!
//! ```text
//!                 rulesync-cli
//!                  |        |
//!        rulesync-core   rulesync-watch
//!                  |
//!          rulesync-tools
//!             |        |
//!     rulesync-meta  rulesync-fs
//! ```
//!
//! [`SyncEngine`] runs every configured tool adapter over the discovered rule
//! files and collects a [`SyncReport`]. [`validate_project`] inspects an
//! existing project without writing anything.

pub mod error;
pub mod sync;
pub mod validate;

pub use error::{Error, Result};
pub use sync::{SyncEngine, SyncOptions, SyncReport, ToolReport, sync_project};
pub use validate::{OutputCheck, OutputStatus, ValidationReport, validate_project};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_missing_input_displays_path() {
        let error = Error::MissingInput {
            path: PathBuf::from("/project/.ai"),
        };

        let display = error.to_string();
        assert!(display.contains("/project/.ai"), "got: {display}");
        assert!(display.contains("Input directory not found"), "got: {display}");
    }
}
