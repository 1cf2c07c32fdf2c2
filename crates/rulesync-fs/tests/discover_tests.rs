use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rulesync_fs::find_markdown_files;

#[test]
fn test_finds_nested_markdown_only() {
    let temp = assert_fs::TempDir::new().unwrap();
    let ai = temp.child(".ai");
    ai.child("main.md").write_str("# Main instruction").unwrap();
    ai.child("secondary.md").write_str("# Secondary").unwrap();
    ai.child("sub/nested.md").write_str("# Nested").unwrap();
    ai.child("ignored.txt").write_str("Not markdown").unwrap();

    let files = find_markdown_files(ai.path());

    let names: Vec<_> = files
        .iter()
        .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["main.md", "secondary.md", "nested.md"]);
    ai.child("ignored.txt").assert(predicate::path::is_file());
}

#[test]
fn test_order_is_deterministic() {
    let temp = assert_fs::TempDir::new().unwrap();
    let ai = temp.child(".ai");
    for name in ["zeta.md", "alpha.md", "b/mid.md", "a/first.md"] {
        ai.child(name).write_str("# rule").unwrap();
    }

    let first = find_markdown_files(ai.path());
    let second = find_markdown_files(ai.path());

    assert_eq!(first, second);
    let rel: Vec<_> = first
        .iter()
        .map(|f| f.strip_prefix(ai.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(rel, vec!["a/first.md", "alpha.md", "b/mid.md", "zeta.md"]);
}

#[test]
fn test_empty_directory() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("empty").create_dir_all().unwrap();

    assert!(find_markdown_files(temp.child("empty").path()).is_empty());
}

#[test]
fn test_nonexistent_directory() {
    let temp = assert_fs::TempDir::new().unwrap();

    assert!(find_markdown_files(temp.child("nonexistent").path()).is_empty());
}
