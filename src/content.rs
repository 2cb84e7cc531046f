//! Content section: raw text of every interesting file
//!
//! Unlike the tree walkers, this walk prunes ignored directories before
//! descending, so their subtrees are never visited. Within a directory all
//! files are written before any subdirectory is entered.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::{is_interesting_file, should_ignore_dir, should_ignore_file};

/// What a content dump wrote, for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContentStats {
    pub folders: usize,
    pub files: usize,
    pub read_errors: usize,
}

/// Writes folder headers and file bodies for a project root.
pub struct ContentDumper<'a> {
    root: &'a Path,
    skip: Option<PathBuf>,
}

impl<'a> ContentDumper<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root, skip: None }
    }

    /// Leave one file out of the dump. Used for the report being written,
    /// whose content is incomplete while the walk runs.
    pub fn skip(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip = Some(path.into());
        self
    }

    pub fn dump<W: Write>(&self, out: &mut W) -> Result<ContentStats> {
        let mut stats = ContentStats::default();
        self.dump_dir(self.root, out, &mut stats)?;

        debug!(
            folders = stats.folders,
            files = stats.files,
            read_errors = stats.read_errors,
            "dumped file contents"
        );
        Ok(stats)
    }

    fn dump_dir<W: Write>(&self, dir: &Path, out: &mut W, stats: &mut ContentStats) -> Result<()> {
        self.write_folder_header(out, dir)?;
        stats.folders += 1;

        let listing = list_dir(dir);
        for file in &listing.files {
            if self.skip.as_deref() == Some(file.as_path()) {
                debug!("not dumping {}: it is the report being written", file.display());
                continue;
            }
            if !write_file(out, file, fs::read(file))? {
                stats.read_errors += 1;
            }
            stats.files += 1;
        }
        for subdir in &listing.dirs {
            self.dump_dir(subdir, out, stats)?;
        }
        Ok(())
    }

    fn write_folder_header<W: Write>(&self, out: &mut W, dir: &Path) -> Result<()> {
        let relative = dir.strip_prefix(self.root).unwrap_or(dir);
        let label = if relative.as_os_str().is_empty() {
            self.root
        } else {
            relative
        };
        write!(out, "\n=== Folder: {} ===\n", label.display())?;
        Ok(())
    }
}

/// One directory level of the content walk.
#[derive(Debug, Default)]
struct Listing {
    /// Interesting, non-ignored files.
    files: Vec<PathBuf>,
    /// Subdirectories to descend into.
    dirs: Vec<PathBuf>,
}

/// List the direct children of `dir`, sorted case-insensitively.
///
/// Entries are classified by the file type the directory listing reports, so
/// nothing is stat'ed while sorting and symlinks are never followed. Entries
/// that cannot be read are logged and left out.
fn list_dir(dir: &Path) -> Listing {
    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| {
            a.to_string_lossy()
                .to_lowercase()
                .cmp(&b.to_string_lossy().to_lowercase())
        })
        .build();

    let mut listing = Listing::default();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {}", err);
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Some(file_type) = entry.file_type() else {
            continue;
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if file_type.is_dir() {
            if !should_ignore_dir(&name) {
                listing.dirs.push(entry.into_path());
            }
        } else if file_type.is_file() && !should_ignore_file(&name) && is_interesting_file(&name) {
            listing.files.push(entry.into_path());
        }
    }
    listing
}

/// Write one file header and its content, or an inline error marker when
/// `contents` is an error. Returns false when the file could not be read.
fn write_file<W: Write>(out: &mut W, path: &Path, contents: io::Result<Vec<u8>>) -> Result<bool> {
    write!(out, "\n--- File: {} ---\n", path.display())?;
    match contents {
        Ok(bytes) => {
            out.write_all(String::from_utf8_lossy(&bytes).as_bytes())?;
            out.write_all(b"\n")?;
            Ok(true)
        }
        Err(e) => {
            warn!("cannot read {}: {}", path.display(), e);
            writeln!(out, "[Error reading file: {}]", e)?;
            Ok(false)
        }
    }
}
