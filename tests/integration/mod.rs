// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories with input documents
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a document with given content, making parent directories as needed
    pub fn create_document<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Create a rule table file with given TOML content
    pub fn create_rules(&self, content: &str) -> PathBuf {
        self.create_document("rules.toml", content)
    }

    /// Glob pattern for files with the given extension directly under the fixture root
    pub fn pattern(&self, extension: &str) -> String {
        format!("{}/*.{extension}", self.root_path.display())
    }
}

/// Compare two strings line by line, reporting every differing line on mismatch
pub fn assert_golden_file(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();
    let line_count = actual_lines.len().max(expected_lines.len());

    let mut diff = String::new();
    for i in 0..line_count {
        let actual_line = actual_lines.get(i);
        let expected_line = expected_lines.get(i);
        if actual_line == expected_line {
            continue;
        }
        if let Some(line) = expected_line {
            diff.push_str(&format!("{:>4} - {}\n", i + 1, line));
        }
        if let Some(line) = actual_line {
            diff.push_str(&format!("{:>4} + {}\n", i + 1, line));
        }
    }

    if !diff.is_empty() {
        panic!(
            "{}: output differs from golden file (expected {} lines, got {})\n{}",
            context,
            expected_lines.len(),
            actual_lines.len(),
            diff
        );
    }
}
