//! Single-file adapters
//!
//! [`RenderedAdapter`] writes a front-matter header and the aggregated rules.
//! [`PassthroughAdapter`] materializes the first rule file as-is.

use std::path::PathBuf;

use rulesync_fs::{combine_contents, io, sync_file};
use rulesync_meta::BuiltinTool;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::integration::{SyncContext, ToolAdapter};
use crate::transform::{FrontMatter, ensure_heading};

/// Combined output with front matter and the heading transform applied.
#[derive(Debug, Clone)]
pub struct RenderedAdapter {
    tool: &'static BuiltinTool,
    output: Option<String>,
    front_matter: FrontMatter,
}

impl RenderedAdapter {
    pub fn new(tool: &'static BuiltinTool, output: Option<String>) -> Self {
        Self {
            tool,
            output,
            front_matter: FrontMatter::cursor(),
        }
    }

    /// Full file content for `sources`.
    ///
    /// With no readable content the result is the front matter alone.
    pub fn render(&self, sources: &[PathBuf]) -> Result<String> {
        let combined = combine_contents(sources);
        for path in &combined.omitted {
            warn!(tool = self.tool.name, path = %path.display(), "Rule file omitted from output");
        }

        let mut content = self.front_matter.render()?;
        if !combined.text.is_empty() {
            content.push_str(&ensure_heading(&combined.text));
        }
        Ok(content)
    }
}

impl ToolAdapter for RenderedAdapter {
    fn tool(&self) -> &'static BuiltinTool {
        self.tool
    }

    fn output_override(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn generate(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let output = self.output_path(&ctx.root);
        let content = self.render(sources)?;
        io::write_text(&output, &content)?;
        debug!(tool = self.tool.name, output = %output.display(), sources = sources.len(), "Rendered rules");
        Ok(vec![output])
    }

    fn plan(&self, ctx: &SyncContext, _sources: &[PathBuf]) -> Vec<PathBuf> {
        vec![self.output_path(&ctx.root)]
    }

    fn describe(&self) -> String {
        "combined file with front matter".to_string()
    }
}

/// First rule file synced to the output with the link-or-copy primitive.
#[derive(Debug, Clone)]
pub struct PassthroughAdapter {
    tool: &'static BuiltinTool,
    output: Option<String>,
}

impl PassthroughAdapter {
    pub fn new(tool: &'static BuiltinTool, output: Option<String>) -> Self {
        Self { tool, output }
    }
}

impl ToolAdapter for PassthroughAdapter {
    fn tool(&self) -> &'static BuiltinTool {
        self.tool
    }

    fn output_override(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn generate(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let Some(first) = sources.first() else {
            return Err(Error::NoSources {
                tool: self.tool.name.to_string(),
            });
        };

        if sources.len() > 1 {
            debug!(
                tool = self.tool.name,
                ignored = sources.len() - 1,
                "Only the first rule file is used"
            );
        }

        let output = self.output_path(&ctx.root);
        sync_file(first, &output, ctx.mode, true)?;
        Ok(vec![output])
    }

    fn plan(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Vec<PathBuf> {
        if sources.is_empty() {
            Vec::new()
        } else {
            vec![self.output_path(&ctx.root)]
        }
    }

    fn describe(&self) -> String {
        "first rule file, linked or copied".to_string()
    }
}
