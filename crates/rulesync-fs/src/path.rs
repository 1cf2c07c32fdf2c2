//! Path handling for reports and link targets

use std::path::{Component, Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Used wherever rulesync shows paths to the user (reports, dry runs) so the
/// output is identical across platforms. File I/O keeps native paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Express `path` relative to `base` for display.
    ///
    /// Falls back to the full path when `path` is not under `base`.
    pub fn relative_to(path: &Path, base: &Path) -> Self {
        match path.strip_prefix(base) {
            Ok(rel) => Self::new(rel),
            Err(_) => Self::new(path),
        }
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Compute the path of `target` as seen from the directory `base`.
///
/// Both paths should be absolute (or both relative to the same directory).
/// Paths on different prefixes (Windows drives) yield `target` unchanged.
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base_parts: Vec<Component<'_>> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let target_parts: Vec<Component<'_>> = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    if let (Some(Component::Prefix(a)), Some(Component::Prefix(b))) =
        (base_parts.first(), target_parts.first())
    {
        if a != b {
            return target.to_path_buf();
        }
    }

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..base_parts.len() {
        result.push("..");
    }
    for part in &target_parts[common..] {
        result.push(part.as_os_str());
    }

    if result.as_os_str().is_empty() {
        result.push(".");
    }
    result
}
