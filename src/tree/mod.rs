//! Directory tree walking logic
//!
//! Two walkers share one listing step (`traversal`):
//!
//! - `TreeWalker`: builds the full tree in memory, used for JSON output
//! - `StreamingWalker`: feeds entries to a `StreamingOutput` sink, used for
//!   the ASCII and Markdown forms

mod json_types;
mod streaming;
mod traversal;
mod walker;

pub use json_types::TreeNode;
pub use streaming::{StreamingOutput, StreamingWalker};
pub use traversal::{Entry, child_prefix, node_name, read_retained_entries, sort_entries};
pub use walker::TreeWalker;
