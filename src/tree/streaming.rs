//! StreamingWalker - renders a tree through a sink without building it in memory

use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

use super::traversal::{child_prefix, read_retained_entries};

/// Callback for streaming output - receives one call per retained entry in
/// display order.
pub trait StreamingOutput {
    /// `prefix` is the ASCII indent accumulated from the ancestors and `depth`
    /// is 0 for direct children of the root.
    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        depth: usize,
    ) -> io::Result<()>;
}

/// Streaming tree walker used for the ASCII and Markdown forms.
///
/// Listing errors are fatal here; only the structural walker recovers from
/// permission failures.
#[derive(Debug, Default)]
pub struct StreamingWalker;

impl StreamingWalker {
    pub fn new() -> Self {
        Self
    }

    /// Walk and stream output - returns (dir_count, file_count)
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> Result<(usize, usize)> {
        let counts = self.walk_dir_streaming(root, "", 0, output)?;
        debug!(dirs = counts.0, files = counts.1, "streamed tree");
        Ok(counts)
    }

    fn walk_dir_streaming<O: StreamingOutput>(
        &self,
        path: &Path,
        prefix: &str,
        depth: usize,
        output: &mut O,
    ) -> Result<(usize, usize)> {
        let entries = read_retained_entries(path)?;
        let last_index = entries.len().saturating_sub(1);

        let mut dir_count = 0;
        let mut file_count = 0;
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i == last_index;
            output.output_node(&entry.name, entry.is_dir, is_last, prefix, depth)?;

            if entry.is_dir {
                dir_count += 1;
                let next_prefix = child_prefix(prefix, is_last);
                let (d, f) = self.walk_dir_streaming(&entry.path, &next_prefix, depth + 1, output)?;
                dir_count += d;
                file_count += f;
            } else {
                file_count += 1;
            }
        }

        Ok((dir_count, file_count))
    }
}
