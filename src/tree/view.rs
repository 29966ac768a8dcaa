//! Read-only traversal and export of a built tree

use crate::tree::builder::Tree;
use crate::tree::node::Node;
use crate::types::NodeId;
use std::collections::VecDeque;

/// Flat node/edge listing of a tree, produced breadth-first.
///
/// Nodes and edges are keyed by structural id, not digest: padding nodes
/// share a digest with the position they duplicate, and keying by digest
/// would silently merge distinct positions in a graph export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Node ids in breadth-first order, root first, left before right.
    pub nodes: Vec<NodeId>,
    /// Parent→child pairs, in the order the children were visited.
    pub edges: Vec<(NodeId, NodeId)>,
}

/// Enumerate nodes and edges breadth-first from the root.
///
/// `None` stands for "no tree" and yields an empty enumeration with no
/// error. The tree is never mutated.
pub fn enumerate(tree: Option<&Tree>) -> Enumeration {
    let tree = match tree {
        Some(tree) => tree,
        None => return Enumeration::default(),
    };

    let mut out = Enumeration::default();
    let mut queue = VecDeque::from([tree.root_id()]);

    while let Some(id) = queue.pop_front() {
        out.nodes.push(id);
        if let Some((left, right)) = tree.node(id).children {
            out.edges.push((id, left));
            out.edges.push((id, right));
            queue.push_back(left);
            queue.push_back(right);
        }
    }

    out
}

/// Depth-first pre-order walk: each node is yielded before its left subtree,
/// and the left subtree before the right.
pub fn preorder(tree: &Tree) -> Preorder<'_> {
    Preorder {
        tree,
        stack: vec![tree.root_id()],
    }
}

/// Iterator state for [`preorder`].
#[derive(Debug)]
pub struct Preorder<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some((left, right)) = self.tree.node(id).children {
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(id)
    }
}

/// Display label for one node, as handed to rendering collaborators.
///
/// `Hash: <first 7 hex chars>...` on one line, the content label on the
/// next, and a trailing `(Padding)` line for padding nodes.
pub fn display_label(node: &Node) -> String {
    let mut label = format!(
        "Hash: {}...\nContent: {}",
        node.digest.short_hex(),
        node.content
    );
    if node.padding {
        label.push_str("\n(Padding)");
    }
    label
}
