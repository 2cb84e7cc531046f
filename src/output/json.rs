//! JSON output formatting

use std::io::Write;

use crate::error::Result;
use crate::tree::TreeNode;

/// Write tree node as pretty-printed JSON (two-space indent, non-ASCII kept
/// literal). No trailing newline.
pub fn write_json<W: Write>(node: &TreeNode, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(out, node)?;
    Ok(())
}
