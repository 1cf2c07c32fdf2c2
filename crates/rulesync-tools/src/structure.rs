//! Structure-preserving Cursor output
//!
//! Mirrors the input tree under `<cursor output without extension>/`, one
//! `.mdc` file per rule file. Stale `.mdc` entries are removed first so
//! deleted rules do not linger.

use std::fs;
use std::path::{Path, PathBuf};

use rulesync_fs::{SyncMode, io, sync_file};
use rulesync_meta::BuiltinTool;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::integration::{SyncContext, ToolAdapter};
use crate::transform::ensure_heading;

/// Extension of Cursor rule files.
pub const RULE_EXTENSION: &str = "mdc";

#[derive(Debug, Clone)]
pub struct StructureAdapter {
    tool: &'static BuiltinTool,
    output: Option<String>,
}

impl StructureAdapter {
    pub fn new(tool: &'static BuiltinTool, output: Option<String>) -> Self {
        Self { tool, output }
    }

    /// Directory the tree is mirrored into.
    pub fn output_root(&self, root: &Path) -> PathBuf {
        self.output_path(root).with_extension("")
    }

    /// Destination for `source`: its path under the input root, re-rooted and
    /// given the `.mdc` extension.
    fn destination(&self, ctx: &SyncContext, source: &Path) -> Option<PathBuf> {
        let relative = match source.strip_prefix(&ctx.input_root) {
            Ok(rel) => rel.to_path_buf(),
            Err(_) => PathBuf::from(source.file_name()?),
        };
        Some(
            self.output_root(&ctx.root)
                .join(relative)
                .with_extension(RULE_EXTENSION),
        )
    }

    /// Remove every `.mdc` file or link under `dir`. Returns the count removed.
    fn clear_stale(&self, dir: &Path) -> usize {
        if !dir.is_dir() {
            return 0;
        }

        let stale: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.file_type().is_dir())
            .map(|entry| entry.into_path())
            .filter(|path| {
                path.extension()
                    .is_some_and(|ext| ext == RULE_EXTENSION)
            })
            .collect();

        let mut removed = 0;
        for path in stale {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove stale rule"),
            }
        }
        removed
    }

    fn sync_one(&self, ctx: &SyncContext, source: &Path, destination: &Path) -> Result<()> {
        let content = io::read_text(source)?;
        let transformed = ensure_heading(&content);

        if transformed == content {
            sync_file(source, destination, ctx.mode, true)?;
            return Ok(());
        }

        // Transformed text cannot be linked; stage it and copy into place.
        let staged = io::temp_sibling(destination);
        let result = io::write_text(&staged, &transformed)
            .and_then(|()| sync_file(&staged, destination, SyncMode::Copy, true));
        if staged.exists() {
            let _ = fs::remove_file(&staged);
        }
        Ok(result?)
    }
}

impl ToolAdapter for StructureAdapter {
    fn tool(&self) -> &'static BuiltinTool {
        self.tool
    }

    fn output_override(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn generate(&self, ctx: &SyncContext, sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let root = self.output_root(&ctx.root);
        let removed = self.clear_stale(&root);
        debug!(root = %root.display(), removed, "Cleared stale rule files");

        let mut written = Vec::new();
        let mut failed = 0;
        for source in sources {
            let Some(destination) = self.destination(ctx, source) else {
                failed += 1;
                continue;
            };
            match self.sync_one(ctx, source, &destination) {
                Ok(()) => written.push(destination),
                Err(e) => {
                    warn!(source = %source.display(), error = %e, "Failed to mirror rule file");
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
        sources
            .iter()
            .filter_map(|source| self.destination(ctx, source))
            .collect()
    }

    fn describe(&self) -> String {
        "mirrored tree of .mdc files".to_string()
    }

    fn output_location(&self, root: &Path) -> PathBuf {
        self.output_root(root)
    }

    fn outputs_directory(&self) -> bool {
        true
    }
}
