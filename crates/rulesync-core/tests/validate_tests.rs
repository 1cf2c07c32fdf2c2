//! Tests for project validation

use rulesync_core::{OutputStatus, SyncOptions, sync_project, validate_project};
use rulesync_meta::RulesConfig;
use rulesync_test_utils::TestProject;
use std::fs;

#[test]
fn test_missing_input_is_an_error() {
    let project = TestProject::new();

    let report = validate_project(project.root(), &RulesConfig::default(), false);

    assert!(!report.is_ok());
    assert!(report.errors[0].starts_with("Input directory not found"));
}

#[test]
fn test_empty_input_is_a_warning() {
    let project = TestProject::with_input_dir();

    let report = validate_project(project.root(), &RulesConfig::default(), false);

    assert!(report.is_ok());
    assert!(report.warnings.iter().any(|w| w.starts_with("No Markdown files found")));
}

#[test]
fn test_missing_outputs_are_not_errors() {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main");

    let report = validate_project(project.root(), &RulesConfig::default(), false);

    assert!(report.is_ok());
    assert_eq!(report.outputs.len(), 4);
    assert!(report.outputs.iter().all(|o| o.status == OutputStatus::Missing));
}

#[test]
fn test_generated_project_passes() {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main");
    sync_project(project.root(), &SyncOptions::default()).unwrap();

    let report = validate_project(project.root(), &RulesConfig::default(), false);

    assert!(report.is_ok(), "errors: {:?}", report.errors);
    assert!(
        report
            .outputs
            .iter()
            .all(|o| matches!(o.status, OutputStatus::Ok { .. }))
    );
}

#[test]
fn test_directory_in_place_of_file_is_an_error() {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main");
    fs::create_dir_all(project.path("devin-guidelines.md")).unwrap();

    let report = validate_project(project.root(), &RulesConfig::default(), false);

    assert!(!report.is_ok());
    assert!(
        report
            .errors
            .contains(&"Output devin-guidelines.md exists but is not a file".to_string())
    );
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_is_an_error() {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main");
    fs::create_dir_all(project.path(".github")).unwrap();
    std::os::unix::fs::symlink(
        project.path("gone.md"),
        project.path(".github/copilot-instructions.md"),
    )
    .unwrap();

    let report = validate_project(project.root(), &RulesConfig::default(), false);

    assert!(!report.is_ok());
    assert!(report.errors.iter().any(|e| e.starts_with("Broken symlink")));
}

#[test]
fn test_preserved_structure_checks_mirrored_directory() {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main");
    let options = SyncOptions {
        preserve_structure: true,
        ..SyncOptions::default()
    };
    sync_project(project.root(), &options).unwrap();

    let report = validate_project(project.root(), &RulesConfig::default(), true);

    let cursor = report.outputs.iter().find(|o| o.tool == "cursor").unwrap();
    assert_eq!(cursor.path.as_str(), ".cursor/rules/core");
    assert!(matches!(cursor.status, OutputStatus::Ok { .. }));
    assert!(report.is_ok(), "errors: {:?}", report.errors);
}
