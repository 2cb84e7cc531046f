//! Run configuration

use std::path::{Path, PathBuf};

use crate::error::{DumpError, Result};

/// Name of the report written into the root directory.
pub const DEFAULT_OUTPUT_FILE: &str = "project_dump.txt";

/// Configuration for a single dump run.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Directory that gets walked.
    pub root: PathBuf,
    /// Report file; relative paths are resolved against `root`.
    pub output: PathBuf,
}

impl DumpConfig {
    /// Configuration rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let root = std::env::current_dir().map_err(DumpError::CurrentDir)?;
        Ok(Self::new(root))
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Full path of the report file.
    pub fn output_path(&self) -> PathBuf {
        resolve_against(&self.root, &self.output)
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
