//! [`TestProject`] builder for darkstrip test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory with helpers for writing source files and
/// asserting on their content afterwards.
///
/// # Example
///
/// ```rust,no_run
/// use darkstrip_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_file("src/app/page.tsx", r#"<main className="p-4 dark:bg-black">"#);
/// project.assert_file_eq("src/app/page.tsx", r#"<main className="p-4">"#);
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
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `path` relative to the project root.
    pub fn path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }

    /// Write a text file, creating parent directories as needed.
    pub fn write_file(&self, path: &str, content: &str) {
        self.write_bytes(path, content.as_bytes());
    }

    /// Write raw bytes, creating parent directories as needed.
    pub fn write_bytes(&self, path: &str, content: &[u8]) {
        let full_path = self.path(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Read a file's bytes.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        let full_path = self.path(path);
        fs::read(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Read a file as UTF-8 text.
    ///
    /// # Panics
    /// Panics if the file cannot be read or is not UTF-8.
    pub fn read_file(&self, path: &str) -> String {
        let full_path = self.path(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that the file at `path` has exactly `expected` as content.
    ///
    /// # Panics
    /// Panics if the file cannot be read or its content differs.
    pub fn assert_file_eq(&self, path: &str, expected: &str) {
        let actual = self.read_file(path);
        assert_eq!(
            actual, expected,
            "File {} does not match expected content",
            path
        );
    }

    /// Assert that the file at `path` contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read_file(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
