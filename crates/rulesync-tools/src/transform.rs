//! Structural content transforms
//!
//! Only the first few lines are inspected; Markdown is never parsed.

use serde::Serialize;

use crate::error::Result;

/// Title prepended to content that lacks a top-level heading.
pub const DEFAULT_TITLE: &str = "# Cursor Rules";

/// Number of leading lines searched for a heading.
const HEADING_SCAN_LINES: usize = 5;

/// Prepend [`DEFAULT_TITLE`] unless one of the first lines is a top-level
/// heading.
pub fn ensure_heading(content: &str) -> String {
    let has_heading = content
        .lines()
        .take(HEADING_SCAN_LINES)
        .any(|line| line.trim().starts_with("# "));

    if has_heading {
        content.to_string()
    } else {
        format!("{DEFAULT_TITLE}\n\n{content}")
    }
}

/// Metadata block at the top of a rendered Cursor rule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    pub description: String,
    pub always_apply: bool,
}

impl FrontMatter {
    pub fn cursor() -> Self {
        Self {
            description: "AI rules for Cursor".to_string(),
            always_apply: true,
        }
    }

    /// Render as a `---` delimited YAML block followed by a blank line.
    pub fn render(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("---\n{yaml}---\n\n"))
    }
}
