//! Node representation for commitment trees

use crate::types::{Digest, NodeId};

/// A single node in the tree arena.
///
/// Leaves carry no children; internal nodes always carry exactly two. The
/// `children` field encodes that a node is never partially populated.
#[derive(Debug, Clone)]
pub struct Node {
    /// Digest committing to this node's subtree.
    pub digest: Digest,
    /// Concatenation of the records covered by this subtree, joined with
    /// `+`. Debugging aid only; not part of the commitment.
    pub content: String,
    /// Left and right child ids, or `None` for a leaf.
    pub children: Option<(NodeId, NodeId)>,
    /// True iff this node duplicates its immediate left sibling to satisfy
    /// the two-children-per-parent invariant.
    pub padding: bool,
}

impl Node {
    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
