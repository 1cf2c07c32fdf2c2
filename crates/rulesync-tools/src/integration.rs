//! ToolAdapter trait for materializing rules into tool layouts

use std::path::{Path, PathBuf};

use rulesync_fs::SyncMode;
use rulesync_meta::BuiltinTool;

use crate::error::Result;

/// Context for one adapter run.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Project root; output paths resolve against it.
    pub root: PathBuf,
    /// Directory the rule files were discovered under.
    pub input_root: PathBuf,
    /// Effective mode for the tool being synced.
    pub mode: SyncMode,
}

impl SyncContext {
    pub fn new(root: impl Into<PathBuf>, input_root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            input_root: input_root.into(),
            mode: SyncMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SyncMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Trait for tool adapters
pub trait ToolAdapter {
    /// Static description of the tool this adapter serves.
    fn tool(&self) -> &'static BuiltinTool;

    /// Configured output path, if it overrides the tool default.
    fn output_override(&self) -> Option<&str>;

    /// Write the tool's output for `sources`.
    ///
    /// Returns the destinations actually written.
    fn generate(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Result<Vec<PathBuf>>;

    /// Destinations `generate` would write, without touching the filesystem.
    fn plan(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Vec<PathBuf>;

    /// Short description of the output layout.
    fn describe(&self) -> String;

    fn name(&self) -> &str {
        self.tool().name
    }

    fn default_output(&self) -> &str {
        self.tool().default_output
    }

    /// Output path under `root`: the configured override, else the default.
    fn output_path(&self, root: &Path) -> PathBuf {
        root.join(self.output_override().unwrap_or(self.default_output()))
    }

    /// Where the output lands under `root`. Equal to [`ToolAdapter::output_path`]
    /// unless the adapter writes somewhere derived from it.
    fn output_location(&self, root: &Path) -> PathBuf {
        self.output_path(root)
    }

    /// True if the output is a directory rather than a single file.
    fn outputs_directory(&self) -> bool {
        self.tool().outputs_directory()
    }
}
