//! Sync outcome types

use rulesync_fs::{NormalizedPath, SyncMode};

/// Outcome for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolReport {
    pub tool: String,
    pub success: bool,
    /// Resolved output path, relative to the project root.
    pub output: NormalizedPath,
    pub mode: SyncMode,
    /// Destinations written, or planned during a dry run.
    pub written: Vec<NormalizedPath>,
    pub error: Option<String>,
}

impl ToolReport {
    pub fn success(
        tool: impl Into<String>,
        output: NormalizedPath,
        mode: SyncMode,
        written: Vec<NormalizedPath>,
    ) -> Self {
        Self {
            tool: tool.into(),
            success: true,
            output,
            mode,
            written,
            error: None,
        }
    }

    pub fn failure(
        tool: impl Into<String>,
        output: NormalizedPath,
        mode: SyncMode,
        error: impl Into<String>,
    ) -> Self {
        Self {
            tool: tool.into(),
            success: false,
            output,
            mode,
            written: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Outcome of a sync run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// True when every known tool succeeded
    pub success: bool,
    /// Whether this run only planned its writes
    pub dry_run: bool,
    /// Rule files discovered, relative to the project root
    pub sources: Vec<NormalizedPath>,
    /// Per-tool outcomes in configuration order
    pub tools: Vec<ToolReport>,
    /// Configured tool names with no adapter
    pub skipped: Vec<String>,
    /// Non-fatal conditions worth showing the user
    pub warnings: Vec<String>,
}

impl SyncReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            success: true,
            dry_run,
            ..Self::default()
        }
    }

    /// Record a tool outcome, folding it into the overall result.
    pub fn push(&mut self, report: ToolReport) {
        self.success &= report.success;
        self.tools.push(report);
    }

    pub fn failed_tools(&self) -> impl Iterator<Item = &ToolReport> {
        self.tools.iter().filter(|t| !t.success)
    }

    pub fn tool(&self, name: &str) -> Option<&ToolReport> {
        self.tools.iter().find(|t| t.tool == name)
    }
}
