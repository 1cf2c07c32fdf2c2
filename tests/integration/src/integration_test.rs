//! End-to-end tests for the full sync flow
//!
//! config loading -> discovery -> adapters -> report -> validation

use pretty_assertions::assert_eq;
use rulesync_core::{OutputStatus, SyncOptions, sync_project, validate_project};
use rulesync_fs::{SEPARATOR, SyncMode};
use rulesync_meta::load_config;
use rulesync_test_utils::TestProject;
use std::fs;

fn setup_project() -> TestProject {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main\n\nAlways write tests.");
    project.write_rule("style/naming.md", "Use descriptive names.");
    project
}

#[test]
fn test_full_generate_then_validate() {
    let project = setup_project();

    let report = sync_project(project.root(), &SyncOptions::default()).unwrap();
    assert!(report.success, "report: {report:?}");
    assert_eq!(report.sources.len(), 2);
    assert_eq!(report.tools.len(), 4);

    // Rendered cursor file: front matter, then the aggregate with a heading kept
    let cursor = project.read(".cursor/rules/core.mdc");
    assert!(cursor.starts_with("---\ndescription: AI rules for Cursor\nalwaysApply: true\n---\n\n"));
    assert!(cursor.contains(&format!(
        "# Main\n\nAlways write tests.{SEPARATOR}Use descriptive names."
    )));

    // Per-file cline directory flattens nested names
    assert_eq!(project.read(".cline-rules/main.md"), "# Main\n\nAlways write tests.");
    assert_eq!(project.read(".cline-rules/naming.md"), "Use descriptive names.");

    // Single-file tools take the first discovered file
    assert_eq!(
        project.read(".github/copilot-instructions.md"),
        "# Main\n\nAlways write tests."
    );
    assert_eq!(project.read("devin-guidelines.md"), "# Main\n\nAlways write tests.");

    let config = load_config(project.root()).unwrap();
    let validation = validate_project(project.root(), &config, false);
    assert!(validation.is_ok(), "errors: {:?}", validation.errors);
    assert_eq!(validation.source_count, 2);
    assert!(
        validation
            .outputs
            .iter()
            .all(|check| matches!(check.status, OutputStatus::Ok { .. }))
    );
}

#[test]
fn test_config_drives_tools_and_modes() {
    let project = setup_project();
    project.write_config(
        "default_mode: copy\ntools:\n  copilot:\n    output: docs/copilot.md\n  devin:\n",
    );

    let report = sync_project(project.root(), &SyncOptions::default()).unwrap();
    assert!(report.success);
    assert_eq!(report.tools.len(), 2);

    project.assert_file_exists("docs/copilot.md");
    project.assert_file_not_exists(".github");
    project.assert_file_not_exists(".cursor");
    assert!(!project.is_symlink("docs/copilot.md"));
    assert!(!project.is_symlink("devin-guidelines.md"));

    let copilot = report.tool("copilot").unwrap();
    assert_eq!(copilot.output.as_str(), "docs/copilot.md");
    assert_eq!(copilot.mode, SyncMode::Copy);
}

#[cfg(unix)]
#[test]
fn test_symlinked_outputs_follow_source_edits() {
    let project = setup_project();

    sync_project(project.root(), &SyncOptions::default()).unwrap();
    assert!(project.is_symlink("devin-guidelines.md"));

    project.write_rule("main.md", "# Main\n\nEdited.");
    assert_eq!(project.read("devin-guidelines.md"), "# Main\n\nEdited.");

    // The rendered output is a snapshot and needs a regeneration
    assert!(!project.read(".cursor/rules/core.mdc").contains("Edited."));
    sync_project(project.root(), &SyncOptions::default()).unwrap();
    assert!(project.read(".cursor/rules/core.mdc").contains("Edited."));
}

#[test]
fn test_dry_run_then_real_run() {
    let project = setup_project();
    let dry = SyncOptions {
        dry_run: true,
        ..SyncOptions::default()
    };

    let planned = sync_project(project.root(), &dry).unwrap();
    assert!(planned.dry_run);
    project.assert_file_not_exists(".cline-rules");

    let real = sync_project(project.root(), &SyncOptions::default()).unwrap();
    for (plan, done) in planned.tools.iter().zip(real.tools.iter()) {
        assert_eq!(plan.tool, done.tool);
        assert_eq!(plan.written, done.written);
    }
}

#[test]
fn test_preserve_structure_replaces_stale_rules() {
    let project = setup_project();
    let options = SyncOptions {
        preserve_structure: true,
        force_mode: Some(SyncMode::Copy),
        ..SyncOptions::default()
    };

    sync_project(project.root(), &options).unwrap();
    project.assert_file_exists(".cursor/rules/core/main.mdc");
    project.assert_file_exists(".cursor/rules/core/style/naming.mdc");

    fs::remove_file(project.path(".ai/style/naming.md")).unwrap();
    sync_project(project.root(), &options).unwrap();

    project.assert_file_exists(".cursor/rules/core/main.mdc");
    project.assert_file_not_exists(".cursor/rules/core/style/naming.mdc");
}
