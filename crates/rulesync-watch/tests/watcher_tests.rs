//! Tests for RuleWatcher against a real directory

use rulesync_watch::{Error, RuleWatcher};
use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn wait_for(counter: &AtomicUsize, at_least: usize, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if counter.load(Ordering::SeqCst) >= at_least {
            return true;
        }
        std::thread::sleep(Duration::from_millis(25));
    }
    counter.load(Ordering::SeqCst) >= at_least
}

#[test]
fn test_start_fails_for_missing_directory() {
    let temp = TempDir::new().unwrap();

    let result = RuleWatcher::start(&temp.path().join("missing"), Duration::from_millis(10), || {});

    assert!(matches!(result, Err(Error::DirectoryNotFound { .. })));
}

#[test]
fn test_markdown_change_triggers_callback() {
    let temp = TempDir::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let handle = RuleWatcher::start(temp.path(), Duration::from_millis(50), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    assert!(handle.is_active());

    fs::write(temp.path().join("main.md"), "# Main").unwrap();

    assert!(wait_for(&calls, 1, Duration::from_secs(5)));
}

#[test]
fn test_non_markdown_change_is_ignored() {
    let temp = TempDir::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let _handle = RuleWatcher::start(temp.path(), Duration::from_millis(50), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();

    fs::write(temp.path().join("notes.txt"), "not a rule").unwrap();

    assert!(!wait_for(&calls, 1, Duration::from_millis(500)));
}

#[test]
fn test_stopped_watcher_stays_quiet() {
    let temp = TempDir::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut handle = RuleWatcher::start(temp.path(), Duration::from_millis(50), move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .unwrap();
    handle.stop();
    assert!(!handle.is_active());

    fs::write(temp.path().join("main.md"), "# Main").unwrap();

    assert!(!wait_for(&calls, 1, Duration::from_millis(500)));
}

#[test]
fn test_callback_never_overlaps_exclusive_work() {
    let temp = TempDir::new().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let busy = Arc::new(AtomicBool::new(false));
    let overlapped = Arc::new(AtomicBool::new(false));

    let handle = {
        let calls = Arc::clone(&calls);
        let busy = Arc::clone(&busy);
        let overlapped = Arc::clone(&overlapped);
        RuleWatcher::start(temp.path(), Duration::from_millis(10), move || {
            if busy.swap(true, Ordering::SeqCst) {
                overlapped.store(true, Ordering::SeqCst);
            }
            busy.store(false, Ordering::SeqCst);
            calls.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap()
    };

    handle.run_exclusive(|| {
        busy.store(true, Ordering::SeqCst);
        fs::write(temp.path().join("main.md"), "# Main").unwrap();
        std::thread::sleep(Duration::from_millis(300));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        busy.store(false, Ordering::SeqCst);
    });

    assert!(wait_for(&calls, 1, Duration::from_secs(5)));
    assert!(!overlapped.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_watch_until_returns_on_shutdown() {
    let temp = TempDir::new().unwrap();
    let handle = RuleWatcher::start(temp.path(), Duration::from_millis(50), || {}).unwrap();

    let finished = tokio::time::timeout(
        Duration::from_secs(5),
        handle.watch_until(tokio::time::sleep(Duration::from_millis(50))),
    )
    .await;

    assert!(finished.is_ok());
}
