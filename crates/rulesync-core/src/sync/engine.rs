//! SyncEngine implementation
//!
//! Discovers rule files once per run and hands them to the adapter of every
//! configured tool. Tool failures are recorded in the report and never stop
//! the remaining tools; only a missing input directory aborts the run.

use std::path::{Path, PathBuf};

use rulesync_fs::{NormalizedPath, SyncMode, clear_conflict, find_markdown_files};
use rulesync_meta::{RulesConfig, ToolConfig, load_config};
use rulesync_tools::{SyncContext, ToolAdapter, ToolDispatcher};
use tracing::{debug, info, warn};

use super::report::{SyncReport, ToolReport};
use crate::{Error, Result};

/// Options for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Mode applied to every tool, overriding configuration.
    pub force_mode: Option<SyncMode>,
    /// Resolve and report destinations without touching the filesystem.
    pub dry_run: bool,
    /// Remove directories occupying single-file destinations.
    pub force: bool,
    /// Mirror the input tree for Cursor instead of a combined file.
    pub preserve_structure: bool,
}

/// Engine for synchronizing rule files into tool layouts
pub struct SyncEngine<'a> {
    root: PathBuf,
    config: &'a RulesConfig,
}

impl<'a> SyncEngine<'a> {
    pub fn new(root: impl Into<PathBuf>, config: &'a RulesConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute input directory.
    pub fn input_dir(&self) -> PathBuf {
        self.config.input_dir(&self.root)
    }

    /// Rule files for this run, in discovery order.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let input_dir = self.input_dir();
        if !input_dir.is_dir() {
            return Err(Error::MissingInput { path: input_dir });
        }
        Ok(find_markdown_files(&input_dir))
    }

    /// Run every configured tool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingInput`] if the input directory does not exist.
    /// Everything else is reported per tool in the returned [`SyncReport`].
    pub fn run(&self, options: &SyncOptions) -> Result<SyncReport> {
        let sources = self.discover()?;
        let input_dir = self.input_dir();

        let mut report = SyncReport::new(options.dry_run);
        report.sources = sources
            .iter()
            .map(|source| NormalizedPath::relative_to(source, &self.root))
            .collect();

        if sources.is_empty() {
            let message = format!(
                "No Markdown files found in {}",
                NormalizedPath::relative_to(&input_dir, &self.root)
            );
            warn!("{message}");
            report.warnings.push(message);
        }

        let dispatcher = ToolDispatcher::new().with_preserve_structure(options.preserve_structure);

        for (name, tool_config) in self.config.tools() {
            let Some(adapter) = dispatcher.get_adapter(name, tool_config) else {
                let message = format!("Skipping unknown tool: {name}");
                warn!("{message}");
                report.skipped.push(name.to_string());
                report.warnings.push(message);
                continue;
            };

            let mode = self.effective_mode(tool_config, options);
            let ctx = SyncContext::new(&self.root, &input_dir).with_mode(mode);

            let tool_report = if options.dry_run {
                self.plan_tool(adapter.as_ref(), &ctx, &sources)
            } else {
                self.sync_tool(adapter.as_ref(), &ctx, &sources, options.force)
            };
            report.push(tool_report);
        }

        info!(
            tools = report.tools.len(),
            skipped = report.skipped.len(),
            success = report.success,
            dry_run = options.dry_run,
            "Sync finished"
        );
        Ok(report)
    }

    /// `force_mode` beats the tool override, which beats `default_mode`.
    fn effective_mode(&self, tool_config: &ToolConfig, options: &SyncOptions) -> SyncMode {
        options
            .force_mode
            .unwrap_or_else(|| tool_config.effective_mode(self.config.default_mode()))
    }

    fn display(&self, path: &Path) -> NormalizedPath {
        NormalizedPath::relative_to(path, &self.root)
    }

    fn plan_tool(
        &self,
        adapter: &dyn ToolAdapter,
        ctx: &SyncContext,
        sources: &[PathBuf],
    ) -> ToolReport {
        let output = self.display(&adapter.output_location(&self.root));
        let planned = adapter
            .plan(ctx, sources)
            .iter()
            .map(|path| self.display(path))
            .collect();
        debug!(tool = adapter.name(), %output, mode = %ctx.mode, "Planned tool output");
        ToolReport::success(adapter.name(), output, ctx.mode, planned)
    }

    fn sync_tool(
        &self,
        adapter: &dyn ToolAdapter,
        ctx: &SyncContext,
        sources: &[PathBuf],
        force: bool,
    ) -> ToolReport {
        let output_path = adapter.output_location(&self.root);
        let output = self.display(&output_path);

        if !adapter.outputs_directory() && output_path.is_dir() {
            if !force {
                let error = rulesync_fs::Error::DestinationConflict {
                    path: output_path.clone(),
                };
                warn!(tool = adapter.name(), error = %error, "Output blocked by a directory");
                return ToolReport::failure(adapter.name(), output, ctx.mode, error.to_string());
            }
            if let Err(e) = clear_conflict(&output_path) {
                return ToolReport::failure(adapter.name(), output, ctx.mode, e.to_string());
            }
        }

        match adapter.generate(ctx, sources) {
            Ok(written) => {
                debug!(tool = adapter.name(), files = written.len(), "Generated tool output");
                let written = written.iter().map(|path| self.display(path)).collect();
                ToolReport::success(adapter.name(), output, ctx.mode, written)
            }
            Err(e) => {
                warn!(tool = adapter.name(), error = %e, "Failed to generate rules");
                ToolReport::failure(adapter.name(), output, ctx.mode, e.to_string())
            }
        }
    }
}

/// Load the configuration for `root` and run a sync with `options`.
pub fn sync_project(root: &Path, options: &SyncOptions) -> Result<SyncReport> {
    let config = load_config(root)?;
    SyncEngine::new(root, &config).run(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulesync_test_utils::TestProject;

    #[test]
    fn test_force_mode_overrides_tool_mode() {
        let config = RulesConfig::default();
        let engine = SyncEngine::new("/project", &config);
        let tool = ToolConfig::default().with_mode(SyncMode::Symlink);

        let forced = SyncOptions {
            force_mode: Some(SyncMode::Copy),
            ..SyncOptions::default()
        };
        assert_eq!(engine.effective_mode(&tool, &forced), SyncMode::Copy);
        assert_eq!(
            engine.effective_mode(&tool, &SyncOptions::default()),
            SyncMode::Symlink
        );
    }

    #[test]
    fn test_tool_mode_overrides_default_mode() {
        let config = RulesConfig::default().with_default_mode(SyncMode::Copy);
        let engine = SyncEngine::new("/project", &config);

        let plain = ToolConfig::default();
        let linked = ToolConfig::default().with_mode(SyncMode::Symlink);
        let options = SyncOptions::default();
        assert_eq!(engine.effective_mode(&plain, &options), SyncMode::Copy);
        assert_eq!(engine.effective_mode(&linked, &options), SyncMode::Symlink);
    }

    #[test]
    fn test_discover_requires_input_dir() {
        let project = TestProject::new();
        let config = RulesConfig::default();
        let engine = SyncEngine::new(project.root(), &config);

        assert!(matches!(
            engine.discover(),
            Err(Error::MissingInput { .. })
        ));
    }
}
