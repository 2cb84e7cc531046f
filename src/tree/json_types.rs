//! Tree node type and its JSON shape

use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A filesystem entry in the structural tree.
///
/// Serialized as `{"name", "type": "folder", "children"}` for directories and
/// `{"name", "type": "file"}` for files. The path is kept for callers but is
/// not part of the JSON output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children of a directory; always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Count (directories, files) below this node, excluding the node itself.
    pub fn counts(&self) -> (usize, usize) {
        self.children()
            .iter()
            .fold((0, 0), |(dirs, files), child| match child {
                TreeNode::File { .. } => (dirs, files + 1),
                TreeNode::Dir { .. } => {
                    let (d, f) = child.counts();
                    (dirs + d + 1, files + f)
                }
            })
    }
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TreeNode::Dir { name, children, .. } => {
                let mut node = serializer.serialize_struct("TreeNode", 3)?;
                node.serialize_field("name", name)?;
                node.serialize_field("type", "folder")?;
                node.serialize_field("children", children)?;
                node.end()
            }
            TreeNode::File { name, .. } => {
                let mut node = serializer.serialize_struct("TreeNode", 2)?;
                node.serialize_field("name", name)?;
                node.serialize_field("type", "file")?;
                node.end()
            }
        }
    }
}
