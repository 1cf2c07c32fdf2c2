//! Project validation
//!
//! Checks the input directory, symlink support, and the state of every
//! configured tool output without writing anything.

use std::fs;
use std::path::Path;

use rulesync_fs::{NormalizedPath, find_markdown_files, symlinks_supported};
use rulesync_meta::RulesConfig;
use rulesync_tools::ToolDispatcher;

/// State of one tool output on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// Present and of the expected kind
    Ok { symlink: bool },
    /// Not generated yet
    Missing,
    /// A symbolic link whose target is gone
    BrokenLink,
    /// A directory where a file is expected, or the reverse
    WrongKind,
}

impl OutputStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, OutputStatus::BrokenLink | OutputStatus::WrongKind)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputStatus::Ok { .. } => "OK",
            OutputStatus::Missing => "Missing",
            OutputStatus::BrokenLink => "Broken",
            OutputStatus::WrongKind => "Conflict",
        }
    }
}

/// Result of checking one tool output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCheck {
    pub tool: String,
    pub path: NormalizedPath,
    pub status: OutputStatus,
}

impl OutputCheck {
    pub fn details(&self) -> String {
        match self.status {
            OutputStatus::Ok { symlink: true } => format!("{} (symlink)", self.path),
            OutputStatus::Ok { symlink: false } => self.path.to_string(),
            OutputStatus::Missing => format!("Output not found: {}", self.path),
            OutputStatus::BrokenLink => format!("Broken symlink: {}", self.path),
            OutputStatus::WrongKind => format!("{} has the wrong file type", self.path),
        }
    }
}

/// Report from validating a project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub input_dir: NormalizedPath,
    pub source_count: usize,
    pub outputs: Vec<OutputCheck>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// No errors. Warnings are allowed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// No errors and no warnings.
    pub fn all_passed(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

/// Validate the project at `root` against `config`.
pub fn validate_project(
    root: &Path,
    config: &RulesConfig,
    preserve_structure: bool,
) -> ValidationReport {
    let input_dir = config.input_dir(root);
    let mut report = ValidationReport {
        input_dir: NormalizedPath::relative_to(&input_dir, root),
        ..ValidationReport::default()
    };

    if input_dir.is_dir() {
        report.source_count = find_markdown_files(&input_dir).len();
        if report.source_count == 0 {
            report
                .warnings
                .push(format!("No Markdown files found in {}", report.input_dir));
        }
    } else {
        report
            .errors
            .push(format!("Input directory not found: {}", report.input_dir));
    }

    if !symlinks_supported() {
        report
            .warnings
            .push("Symlinks are not supported on this system; copies will be used".to_string());
    }

    let dispatcher = ToolDispatcher::new().with_preserve_structure(preserve_structure);
    for (name, tool_config) in config.tools() {
        let Some(adapter) = dispatcher.get_adapter(name, tool_config) else {
            report.warnings.push(format!("Skipping unknown tool: {name}"));
            continue;
        };

        let path = adapter.output_location(root);
        let check = OutputCheck {
            tool: name.to_string(),
            path: NormalizedPath::relative_to(&path, root),
            status: inspect(&path, adapter.outputs_directory()),
        };
        match check.status {
            OutputStatus::BrokenLink => report.errors.push(check.details()),
            OutputStatus::WrongKind if adapter.outputs_directory() => report
                .errors
                .push(format!("Output {} exists but is not a directory", check.path)),
            OutputStatus::WrongKind => report
                .errors
                .push(format!("Output {} exists but is not a file", check.path)),
            _ => {}
        }
        report.outputs.push(check);
    }

    report
}

fn inspect(path: &Path, expect_directory: bool) -> OutputStatus {
    let Ok(link_meta) = fs::symlink_metadata(path) else {
        return OutputStatus::Missing;
    };
    let symlink = link_meta.file_type().is_symlink();

    let Ok(meta) = fs::metadata(path) else {
        return OutputStatus::BrokenLink;
    };

    if meta.is_dir() == expect_directory {
        OutputStatus::Ok { symlink }
    } else {
        OutputStatus::WrongKind
    }
}
