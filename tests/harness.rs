//! Test harness for treedump integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub use treedump::DEFAULT_OUTPUT_FILE;

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Read the report written by the last run.
    pub fn report(&self) -> String {
        fs::read_to_string(self.dir.path().join(DEFAULT_OUTPUT_FILE))
            .expect("Failed to read report")
    }
}

/// Run the binary in `dir` and return (stdout, stderr, success).
pub fn run_treedump(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_treedump");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run treedump");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Slice out one report section, from its header up to the next `=== Project` header.
pub fn section<'a>(report: &'a str, header: &str) -> &'a str {
    let start = report
        .find(header)
        .unwrap_or_else(|| panic!("missing section {}", header));
    let body = &report[start + header.len()..];
    let end = body.find("\n=== Project").unwrap_or(body.len());
    &body[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("src/Program.cs", "class Program {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_section_slicing() {
        let report = "=== Project Tree ===\na\n\n=== Project Tree (JSON) ===\nb\n";
        assert_eq!(section(report, "=== Project Tree ==="), "\na\n");
        assert_eq!(section(report, "=== Project Tree (JSON) ==="), "\nb\n");
    }
}
