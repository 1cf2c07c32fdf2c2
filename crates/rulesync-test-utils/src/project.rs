//! [`TestProject`] builder for rulesync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for writing rule files and
/// configuration, and for asserting on generated outputs.
///
/// # Example
///
/// ```rust,no_run
/// use rulesync_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_rule("main.md", "# Main\n\nRules.");
/// project.write_config("default_mode: copy\n");
/// project.assert_file_exists(".ai/main.md");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project with an empty `.ai/` input directory.
    pub fn with_input_dir() -> Self {
        let project = Self::new();
        fs::create_dir_all(project.input_dir()).unwrap();
        project
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The default input directory, `.ai/`.
    pub fn input_dir(&self) -> PathBuf {
        self.root().join(".ai")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a rule file under `.ai/`, creating directories as needed.
    pub fn write_rule(&self, relative: &str, content: &str) -> PathBuf {
        self.write_file(&format!(".ai/{relative}"), content)
    }

    /// Write `.ai-rules.yml`.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        self.write_file(".ai-rules.yml", yaml)
    }

    /// Write any file relative to the root, creating directories as needed.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics with the path if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let full_path = self.path(relative);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// True if `relative` is a symbolic link.
    pub fn is_symlink(&self, relative: &str) -> bool {
        fs::symlink_metadata(self.path(relative))
            .map(|meta| meta.file_type().is_symlink())
            .unwrap_or(false)
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `relative` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {relative} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
