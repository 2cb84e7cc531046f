//! Fatal errors that abort a dump run
//!
//! Per-item failures (an unreadable file in the content section, a
//! permission-denied directory in the JSON tree) are reported inline and never
//! reach this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DumpError {
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("cannot read directory '{}': {}", path.display(), source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot create '{}': {}", path.display(), source)]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error writing output: {0}")]
    Write(#[from] io::Error),

    #[error("cannot serialize tree: {0}")]
    Json(#[from] serde_json::Error),
}

impl DumpError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DumpError::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying I/O error is a permission failure.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            DumpError::ReadDir { source, .. }
            | DumpError::CreateOutput { source, .. }
            | DumpError::CurrentDir(source)
            | DumpError::Write(source) => source.kind() == io::ErrorKind::PermissionDenied,
            DumpError::Json(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DumpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dir_message_names_path() {
        let err = DumpError::read_dir(
            "/tmp/project/src",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/project/src"), "message: {}", msg);
        assert!(msg.contains("gone"), "message: {}", msg);
    }

    #[test]
    fn test_permission_denied_detection() {
        let denied = DumpError::read_dir(
            "secret",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(denied.is_permission_denied());

        let missing = DumpError::read_dir("gone", io::Error::new(io::ErrorKind::NotFound, "x"));
        assert!(!missing.is_permission_denied());
    }
}
