//! Flat per-file output directory

use std::fs;
use std::path::PathBuf;

use rulesync_fs::sync_file;
use rulesync_meta::BuiltinTool;
use tracing::warn;

use crate::error::{Error, Result};
use crate::integration::{SyncContext, ToolAdapter};

/// Syncs every rule file into one directory under its own file name.
///
/// Nested input files land flat in the output directory; later files with
/// the same name replace earlier ones.
#[derive(Debug, Clone)]
pub struct PerFileAdapter {
    tool: &'static BuiltinTool,
    output: Option<String>,
}

impl PerFileAdapter {
    pub fn new(tool: &'static BuiltinTool, output: Option<String>) -> Self {
        Self { tool, output }
    }

    fn destinations(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Vec<(PathBuf, PathBuf)> {
        let dir = self.output_path(&ctx.root);
        sources
            .iter()
            .filter_map(|source| {
                let name = source.file_name()?;
                Some((source.clone(), dir.join(name)))
            })
            .collect()
    }
}

impl ToolAdapter for PerFileAdapter {
    fn tool(&self) -> &'static BuiltinTool {
        self.tool
    }

    fn output_override(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn generate(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let dir = self.output_path(&ctx.root);
        fs::create_dir_all(&dir).map_err(|e| rulesync_fs::Error::io(&dir, e))?;

        let mut written = Vec::new();
        let mut failed = 0;
        for (source, destination) in self.destinations(ctx, sources) {
            match sync_file(&source, &destination, ctx.mode, true) {
                Ok(()) => written.push(destination),
                Err(e) => {
                    warn!(tool = self.tool.name, source = %source.display(), error = %e, "Failed to sync rule file");
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(Error::FilesFailed {
                tool: self.tool.name.to_string(),
                failed,
                total: sources.len(),
            });
        }
        Ok(written)
    }

    fn plan(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Vec<PathBuf> {
        self.destinations(ctx, sources)
            .into_iter()
            .map(|(_, destination)| destination)
            .collect()
    }

    fn describe(&self) -> String {
        "one file per rule".to_string()
    }
}
