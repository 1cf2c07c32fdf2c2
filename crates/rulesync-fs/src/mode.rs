//! Sync mode selection

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an output file is materialized from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Relative symbolic link to the source, falling back to a copy when the
    /// platform refuses the link.
    #[default]
    Symlink,

    /// Full content copy with timestamps preserved.
    Copy,
}

impl SyncMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncMode::Symlink => "symlink",
            SyncMode::Copy => "copy",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
