//! Watch-and-regenerate cycle across the watcher and the sync engine

use rulesync_core::{SyncOptions, sync_project};
use rulesync_test_utils::TestProject;
use rulesync_watch::RuleWatcher;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn wait_for(timeout: Duration, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    condition()
}

#[test]
fn test_rule_edit_triggers_regeneration() {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main\n\nFirst.");
    project.write_config("default_mode: copy\n");

    let options = SyncOptions {
        force: true,
        ..SyncOptions::default()
    };
    sync_project(project.root(), &options).unwrap();
    assert!(project.read("devin-guidelines.md").contains("First."));

    let runs = Arc::new(AtomicUsize::new(0));
    let root = PathBuf::from(project.root());
    let counter = Arc::clone(&runs);
    let handle = RuleWatcher::start(&project.input_dir(), Duration::from_millis(100), move || {
        if sync_project(&root, &options).is_ok() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    })
    .unwrap();

    // Give the OS watch a moment to register
    std::thread::sleep(Duration::from_millis(200));
    project.write_rule("main.md", "# Main\n\nSecond.");

    let regenerated = wait_for(Duration::from_secs(10), || {
        runs.load(Ordering::SeqCst) > 0 && project.read("devin-guidelines.md").contains("Second.")
    });
    assert!(regenerated, "watcher did not regenerate outputs");

    drop(handle);
}

#[test]
fn test_non_markdown_changes_are_ignored() {
    let project = TestProject::with_input_dir();
    project.write_rule("main.md", "# Main");

    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let mut handle = RuleWatcher::start(&project.input_dir(), Duration::from_millis(50), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    std::thread::sleep(Duration::from_millis(200));
    project.write_file(".ai/notes.txt", "not a rule");
    std::thread::sleep(Duration::from_millis(500));

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    handle.stop();
    assert!(!handle.is_active());
}
