//! Output formatting for tree display
//!
//! - `tree`: ASCII tree with box-drawing connectors
//! - `markdown`: nested bullet list
//! - `json`: structural form serialization
//!
//! Also home to the colored confirmation line printed after a run.

mod json;
mod markdown;
mod tree;

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub use json::write_json;
pub use markdown::MarkdownFormatter;
pub use tree::TreeFormatter;

/// Print the one-line success message to stdout.
pub fn print_confirmation(output_path: &Path, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_confirmation(&mut stdout, output_path)
}

fn write_confirmation<W: WriteColor>(out: &mut W, output_path: &Path) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "✓")?;
    out.reset()?;
    writeln!(out, " Project dump written to {}", output_path.display())?;
    Ok(())
}
