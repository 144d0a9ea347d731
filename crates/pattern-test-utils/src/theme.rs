//! [`TestTheme`] builder for Pattern Studio test scenarios.

use pattern_fs::NormalizedPath;
use pattern_meta::PatternRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project (theme) directory with helpers for setup and
/// assertions.
///
/// # Example
///
/// ```rust,no_run
/// use pattern_test_utils::TestTheme;
///
/// let theme = TestTheme::new();
/// theme.init_studio("file");
/// theme.write_pattern_file("hero.php", "<?php\n/**\n * Title: Hero\n */\n?>\n");
/// theme.assert_file_exists("patterns/hero.php");
/// ```
pub struct TestTheme {
    temp_dir: TempDir,
}

impl Default for TestTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTheme {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the project directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root as a [`NormalizedPath`].
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// `<root>/patterns`
    pub fn patterns_dir(&self) -> PathBuf {
        self.root().join("patterns")
    }

    /// Write `.patterns/config.toml` with the given mode and auto-import
    /// turned off, so tests decide when imports happen.
    pub fn init_studio(&self, mode: &str) {
        self.write_config(&format!(
            "[core]\nmode = \"{mode}\"\n\n[import]\nauto_import = false\n"
        ));
    }

    /// Write `.patterns/config.toml` verbatim.
    pub fn write_config(&self, content: &str) {
        let state_dir = self.root().join(".patterns");
        fs::create_dir_all(&state_dir).unwrap();
        fs::write(state_dir.join("config.toml"), content).unwrap();
    }

    /// Write raw text to `patterns/<name>`.
    pub fn write_pattern_file(&self, name: &str, text: &str) -> PathBuf {
        fs::create_dir_all(self.patterns_dir()).unwrap();
        let path = self.patterns_dir().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    /// Serialize `record` to `patterns/<slug>.php`.
    pub fn write_pattern(&self, record: &PatternRecord) -> PathBuf {
        self.write_pattern_file(
            &format!("{}.php", record.slug()),
            &pattern_format::serialize(record),
        )
    }

    /// Read a file relative to the root.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to the root) contains
    /// `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
