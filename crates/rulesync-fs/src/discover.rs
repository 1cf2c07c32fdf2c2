//! Rule file discovery

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Extension of rule files.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Recursively find Markdown files under `dir`.
///
/// Traversal is sorted by file name so the result order is stable across runs
/// and platforms. A missing directory yields an empty list.
pub fn find_markdown_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry during discovery");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_markdown(path))
        .collect();

    debug!(dir = %dir.display(), count = files.len(), "Discovered rule files");
    files
}

/// True if `path` carries the Markdown extension.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}
