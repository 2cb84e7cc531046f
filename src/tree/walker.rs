//! TreeWalker - builds the full tree in memory for JSON output

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;

use super::json_types::TreeNode;
use super::traversal::{Entry, node_name, read_retained_entries};

/// Tree walker that builds the structural form of a directory.
///
/// A directory that cannot be listed because of missing permissions becomes a
/// node with no children. Any other listing error aborts the walk.
#[derive(Debug, Default)]
pub struct TreeWalker;

impl TreeWalker {
    pub fn new() -> Self {
        Self
    }

    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let tree = self.walk_dir(root)?;
        let (dirs, files) = tree.counts();
        debug!(root = %tree.path().display(), dirs, files, "built structural tree");
        Ok(tree)
    }

    fn walk_dir(&self, path: &Path) -> Result<TreeNode> {
        let entries = children_or_empty(read_retained_entries(path))?;

        let children = entries
            .into_iter()
            .map(|entry| {
                if entry.is_dir {
                    self.walk_dir(&entry.path)
                } else {
                    Ok(TreeNode::File {
                        name: entry.name,
                        path: entry.path,
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TreeNode::Dir {
            name: node_name(path),
            path: path.to_path_buf(),
            children,
        })
    }
}

/// A directory we may not list still appears, with no children.
fn children_or_empty(listing: Result<Vec<Entry>>) -> Result<Vec<Entry>> {
    match listing {
        Err(e) if e.is_permission_denied() => {
            warn!("{}; listing it with no children", e);
            Ok(Vec::new())
        }
        other => other,
    }
}
