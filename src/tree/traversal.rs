//! Directory listing shared by every tree form.
//!
//! ASCII, Markdown and JSON output all go through `read_retained_entries`, so
//! the set of entries they show is always the same.

use std::path::{Path, PathBuf};

use crate::error::{DumpError, Result};
use crate::filter::{should_ignore_dir, should_ignore_file};

/// A retained child of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Read a directory, drop ignored entries and sort the rest by
/// case-insensitive name.
///
/// Symlinks and special files (sockets, fifos, devices) are skipped. The sort
/// is stable, so names that only differ in case keep enumeration order.
pub fn read_retained_entries(path: &Path) -> Result<Vec<Entry>> {
    let read_dir = std::fs::read_dir(path).map_err(|e| DumpError::read_dir(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| DumpError::read_dir(path, e))?;
        let Ok(file_type) = dir_entry.file_type() else {
            continue;
        };
        let name = dir_entry.file_name().to_string_lossy().into_owned();

        if file_type.is_dir() {
            if should_ignore_dir(&name) {
                continue;
            }
        } else if file_type.is_file() {
            if should_ignore_file(&name) {
                continue;
            }
        } else {
            continue;
        }

        entries.push(Entry {
            name,
            path: dir_entry.path(),
            is_dir: file_type.is_dir(),
        });
    }

    sort_entries(&mut entries);
    Ok(entries)
}

/// Stable case-insensitive sort by name.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(|e| e.name.to_lowercase());
}

/// Get the display name of a path, defaulting to "." when it has none
pub fn node_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Calculate the prefix for child entries
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}
