//! Report assembly: four sections written in a fixed order

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::DumpConfig;
use crate::content::ContentDumper;
use crate::error::{DumpError, Result};
use crate::output::{MarkdownFormatter, TreeFormatter, write_json};
use crate::tree::{StreamingWalker, TreeWalker};

pub const ASCII_HEADER: &str = "=== Project Tree ===";
pub const MARKDOWN_HEADER: &str = "=== Project Tree (Markdown) ===";
pub const MARKDOWN_TITLE: &str = "# Project Structure";
pub const JSON_HEADER: &str = "=== Project Tree (JSON) ===";
pub const CONTENT_HEADER: &str = "=== Project Files Content ===";

/// Write the full report for `root` into `out`.
///
/// Each tree form re-walks the filesystem. Errors listing the root or any
/// retained subdirectory in the ASCII or Markdown pass abort the report.
pub fn write_report<W: Write>(root: &Path, out: &mut W) -> Result<()> {
    write_sections(root, None, out)
}

/// Write the report, leaving `report_path` out of the content section.
fn write_sections<W: Write>(root: &Path, report_path: Option<&Path>, out: &mut W) -> Result<()> {
    let walker = StreamingWalker::new();

    let mut ascii = TreeFormatter::new();
    walker.walk_streaming(root, &mut ascii)?;
    writeln!(out, "{}", ASCII_HEADER)?;
    writeln!(out, "{}/", root.display())?;
    out.write_all(ascii.output().as_bytes())?;
    out.write_all(b"\n\n")?;

    let mut markdown = MarkdownFormatter::new();
    walker.walk_streaming(root, &mut markdown)?;
    writeln!(out, "{}", MARKDOWN_HEADER)?;
    writeln!(out, "{}", MARKDOWN_TITLE)?;
    out.write_all(markdown.output().as_bytes())?;
    out.write_all(b"\n\n")?;

    let tree = TreeWalker::new().walk(root)?;
    writeln!(out, "{}", JSON_HEADER)?;
    write_json(&tree, out)?;
    out.write_all(b"\n\n")?;

    writeln!(out, "{}", CONTENT_HEADER)?;
    let mut dumper = ContentDumper::new(root);
    if let Some(path) = report_path {
        dumper = dumper.skip(path);
    }
    dumper.dump(out)?;

    Ok(())
}

/// Run a dump: truncate the output file, write the report, flush.
///
/// The output file is created before the walk starts, so it shows up in its
/// own trees the same way on every run. Its content is never dumped, even
/// when its extension is an interesting one.
pub fn run(config: &DumpConfig) -> Result<PathBuf> {
    let output_path = config.output_path();
    let file = File::create(&output_path).map_err(|source| DumpError::CreateOutput {
        path: output_path.clone(),
        source,
    })?;

    let mut out = BufWriter::new(file);
    write_sections(&config.root, Some(&output_path), &mut out)?;
    out.flush()?;

    info!("wrote {}", output_path.display());
    Ok(output_path)
}
