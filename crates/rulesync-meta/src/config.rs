//! Configuration model
//!
//! [`RulesConfig`] is the normalized, immutable form of `.ai-rules.yml`. It is
//! built once per command and passed by reference to the sync engine.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rulesync_fs::SyncMode;
use serde::{Deserialize, Serialize};

use crate::tools::BUILTIN_TOOLS;

/// Input directory used when none is configured.
pub const DEFAULT_INPUT_PATH: &str = ".ai";

/// Per-tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Output path relative to the project root, overriding the tool default.
    #[serde(default)]
    pub output: Option<String>,
    /// Sync mode override for this tool.
    #[serde(default)]
    pub mode: Option<SyncMode>,
}

impl ToolConfig {
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: SyncMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// The mode this tool syncs with when no process-wide override is given.
    pub fn effective_mode(&self, default_mode: SyncMode) -> SyncMode {
        self.mode.unwrap_or(default_mode)
    }
}

/// Normalized project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesConfig {
    default_mode: SyncMode,
    input_path: String,
    tools: BTreeMap<String, ToolConfig>,
}

impl RulesConfig {
    /// Build a configuration, normalizing `input_path`.
    pub fn new(
        default_mode: SyncMode,
        input_path: impl AsRef<str>,
        tools: BTreeMap<String, ToolConfig>,
    ) -> Self {
        Self {
            default_mode,
            input_path: normalize_input_path(input_path.as_ref()),
            tools,
        }
    }

    /// Every built-in tool with default settings.
    pub fn builtin_tools() -> BTreeMap<String, ToolConfig> {
        BUILTIN_TOOLS
            .iter()
            .map(|tool| (tool.name.to_string(), ToolConfig::default()))
            .collect()
    }

    pub fn default_mode(&self) -> SyncMode {
        self.default_mode
    }

    /// Configured input directory, relative to the project root.
    pub fn input_path(&self) -> &str {
        &self.input_path
    }

    /// Absolute input directory for a project rooted at `root`.
    pub fn input_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.input_path)
    }

    /// Configured tools in name order.
    pub fn tools(&self) -> impl Iterator<Item = (&str, &ToolConfig)> {
        self.tools.iter().map(|(name, config)| (name.as_str(), config))
    }

    pub fn tool(&self, name: &str) -> Option<&ToolConfig> {
        self.tools.get(name)
    }

    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Replace the default mode.
    pub fn with_default_mode(mut self, mode: SyncMode) -> Self {
        self.default_mode = mode;
        self
    }

    /// Add or replace a tool entry.
    pub fn with_tool(mut self, name: impl Into<String>, config: ToolConfig) -> Self {
        self.tools.insert(name.into(), config);
        self
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new(SyncMode::default(), DEFAULT_INPUT_PATH, Self::builtin_tools())
    }
}

/// Trim trailing separators; an empty result falls back to the default.
fn normalize_input_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches(['/', '\\']);
    if trimmed.is_empty() {
        DEFAULT_INPUT_PATH.to_string()
    } else {
        trimmed.to_string()
    }
}
