//! treedump - dump a project's tree and its interesting source files into one report

pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod output;
pub mod report;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{DEFAULT_OUTPUT_FILE, DumpConfig};
pub use content::{ContentDumper, ContentStats};
pub use error::{DumpError, Result};
pub use filter::{is_interesting_file, should_ignore_dir, should_ignore_file};
pub use output::{MarkdownFormatter, TreeFormatter, print_confirmation, write_json};
pub use report::{run, write_report};
pub use tree::{StreamingOutput, StreamingWalker, TreeNode, TreeWalker};
