#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the div-guard binary.
#[macro_export]
macro_rules! div_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("div-guard"))
    };
}

/// Creates a temporary project directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.div-guard.toml` config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".div-guard.toml", content);
    }

    /// Creates `blog/<name>` with the given content.
    pub fn create_post(&self, name: &str, content: &str) {
        self.create_file(&format!("blog/{name}"), content);
    }
}

/// A balanced post whose only box closes right away.
pub fn balanced_post() -> String {
    "<html>\n<body>\n<div class=\"callout\">\n<p>Tip</p>\n</div>\n</body>\n</html>\n".to_string()
}

/// A balanced post with a box of `class` that closes `distance` lines after it opens.
pub fn post_with_box(class: &str, distance: usize) -> String {
    let mut content = format!("<div class=\"{class}\">\n");
    for i in 1..distance {
        let _ = writeln!(content, "<p>line {i}</p>");
    }
    content.push_str("</div>\n");
    content
}

/// A post with a box that never closes, followed by `filler` lines.
pub fn post_with_unclosed_box(class: &str, filler: usize) -> String {
    let mut content = format!("<div class=\"{class}\">\n");
    for i in 0..filler {
        let _ = writeln!(content, "<p>line {i}</p>");
    }
    content
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
