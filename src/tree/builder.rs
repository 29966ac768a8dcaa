//! Tree builder: reduces an ordered record list to a single root digest

use crate::error::TreeError;
use crate::tree::hasher;
use crate::tree::node::Node;
use crate::types::{Digest, NodeId};
use std::time::Instant;
use tracing::{info, instrument, trace};

/// Complete commitment tree over an ordered record list.
///
/// Nodes live in an arena indexed by [`NodeId`]; children are reachable only
/// through their parent, and the tree is immutable once built.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    /// Build a tree directly from an iterator of records.
    pub fn from_records<I, S>(records: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = TreeBuilder::new();
        for record in records {
            builder.push(record);
        }
        builder.build()
    }

    /// Structural id of the root node.
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    /// Root digest: the commitment to the entire padded record list.
    pub fn root_digest(&self) -> &Digest {
        &self.node(self.root).digest
    }

    /// Node lookup by structural id.
    ///
    /// Ids are only handed out by this tree's own build and traversals, so a
    /// lookup cannot miss; [`Tree::get`] covers ids of unknown origin.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Fallible node lookup.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Total number of nodes, padding included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf positions, padding included.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Iterate all nodes with their structural ids, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}

/// Collects records and builds the commitment tree.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    records: Vec<String>,
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record. Input order is preserved left-to-right in the
    /// final tree.
    pub fn push(&mut self, record: impl Into<String>) -> &mut Self {
        self.records.push(record.into());
        self
    }

    /// Append one record supplied as raw bytes, validating the fixed UTF-8
    /// input encoding.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self, TreeError> {
        let record = std::str::from_utf8(bytes).map_err(|source| TreeError::InvalidEncoding {
            index: self.records.len(),
            source,
        })?;
        self.records.push(record.to_string());
        Ok(self)
    }

    /// Number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Build the commitment tree.
    ///
    /// Leaves are hashed in input order; any level with an odd node count is
    /// padded with a fresh copy of its last element before pairing, and the
    /// padding rule applies at every recursion level, not only to the leaf
    /// row.
    #[instrument(skip(self), fields(record_count = self.records.len()))]
    pub fn build(&self) -> Result<Tree, TreeError> {
        if self.records.is_empty() {
            return Err(TreeError::EmptyInput);
        }

        let start = Instant::now();
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * self.records.len());

        let mut leaves: Vec<NodeId> = self
            .records
            .iter()
            .map(|record| {
                let digest = hasher::leaf_digest(record);
                trace!(digest = %digest, "Hashed leaf");
                push_node(
                    &mut nodes,
                    Node {
                        digest,
                        content: record.clone(),
                        children: None,
                        padding: false,
                    },
                )
            })
            .collect();

        if leaves.len() % 2 == 1 {
            let last = leaves[leaves.len() - 1];
            leaves.push(pad_copy(&mut nodes, last));
        }

        let root = reduce(&mut nodes, leaves);

        info!(
            node_count = nodes.len(),
            root_digest = %nodes[root.index()].digest,
            duration_us = start.elapsed().as_micros() as u64,
            "Tree build completed"
        );

        Ok(Tree { nodes, root })
    }
}

/// Push a node into the arena and return its structural id.
fn push_node(nodes: &mut Vec<Node>, node: Node) -> NodeId {
    let id = NodeId(nodes.len());
    nodes.push(node);
    id
}

/// Fresh padding copy of `source`: same digest and content, flagged, in its
/// own arena slot so exports never conflate it with the position it mirrors.
///
/// The reduction only ever pads positions from the leaf row, so the copy
/// carries no children.
fn pad_copy(nodes: &mut Vec<Node>, source: NodeId) -> NodeId {
    let (digest, content) = {
        let node = &nodes[source.index()];
        (node.digest, node.content.clone())
    };
    push_node(
        nodes,
        Node {
            digest,
            content,
            children: None,
            padding: true,
        },
    )
}

/// Recursively reduce a run of leaf positions to a single subtree root.
fn reduce(nodes: &mut Vec<Node>, mut ids: Vec<NodeId>) -> NodeId {
    if ids.len() % 2 == 1 {
        let last = ids[ids.len() - 1];
        ids.push(pad_copy(nodes, last));
    }

    if ids.len() == 2 {
        return combine(nodes, ids[0], ids[1]);
    }

    let half = ids.len() / 2;
    let right_ids = ids.split_off(half);
    let left = reduce(nodes, ids);
    let right = reduce(nodes, right_ids);
    combine(nodes, left, right)
}

/// Combine two subtree roots into a parent node.
fn combine(nodes: &mut Vec<Node>, left: NodeId, right: NodeId) -> NodeId {
    let digest = hasher::combine(&nodes[left.index()].digest, &nodes[right.index()].digest);
    let content = format!(
        "{}+{}",
        nodes[left.index()].content,
        nodes[right.index()].content
    );
    push_node(
        nodes,
        Node {
            digest,
            content,
            children: Some((left, right)),
            padding: false,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        let builder = TreeBuilder::new();
        let err = builder.build().unwrap_err();
        assert!(matches!(err, TreeError::EmptyInput));
    }

    #[test]
    fn test_two_records_combine_directly() {
        let tree = Tree::from_records(["a", "b"]).unwrap();

        let expected = hasher::combine(&hasher::leaf_digest("a"), &hasher::leaf_digest("b"));
        assert_eq!(*tree.root_digest(), expected);

        // Two leaves plus one root, no padding anywhere.
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_count(), 2);
        assert!(tree.iter().all(|(_, node)| !node.padding));
    }

    #[test]
    fn test_single_record_pairs_with_its_own_copy() {
        let tree = Tree::from_records(["x"]).unwrap();

        let leaf = hasher::leaf_digest("x");
        assert_eq!(*tree.root_digest(), hasher::combine(&leaf, &leaf));

        // No "root == bare leaf" shortcut: one real leaf, one padding copy,
        // one combination step.
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.leaf_count(), 2);
        let padding: Vec<_> = tree.iter().filter(|(_, node)| node.padding).collect();
        assert_eq!(padding.len(), 1);
        assert_eq!(padding[0].1.digest, leaf);
        assert_eq!(padding[0].1.content, "x");
    }

    #[test]
    fn test_four_records_build_balanced_tree() {
        let tree = Tree::from_records(["a", "b", "c", "d"]).unwrap();

        let ab = hasher::combine(&hasher::leaf_digest("a"), &hasher::leaf_digest("b"));
        let cd = hasher::combine(&hasher::leaf_digest("c"), &hasher::leaf_digest("d"));
        assert_eq!(*tree.root_digest(), hasher::combine(&ab, &cd));

        assert_eq!(tree.node_count(), 7);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.node(tree.root_id()).content, "a+b+c+d");
    }

    #[test]
    fn test_odd_count_pads_with_last_record() {
        let tree = Tree::from_records(["a", "b", "c"]).unwrap();

        // Three records pad to four leaves; the one padding leaf duplicates
        // the last input.
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.node_count(), 7);

        let padding: Vec<_> = tree.iter().filter(|(_, node)| node.padding).collect();
        assert_eq!(padding.len(), 1);
        assert_eq!(padding[0].1.content, "c");
        assert_eq!(padding[0].1.digest, hasher::leaf_digest("c"));

        assert_eq!(tree.node(tree.root_id()).content, "a+b+c+c");
    }

    #[test]
    fn test_five_records_pad_at_every_level() {
        let tree = Tree::from_records(["a", "b", "c", "d", "e"]).unwrap();

        // Five records pad to six at the leaf row, then each three-wide half
        // pads again inside the recursion: eight leaf positions, three of
        // them padding.
        assert_eq!(tree.leaf_count(), 8);
        assert_eq!(tree.node_count(), 15);
        assert_eq!(
            tree.iter().filter(|(_, node)| node.padding).count(),
            3
        );
        assert_eq!(tree.node(tree.root_id()).content, "a+b+c+c+d+e+e+e");

        // The root must match the hand-computed reduction exactly.
        let a = hasher::leaf_digest("a");
        let b = hasher::leaf_digest("b");
        let c = hasher::leaf_digest("c");
        let d = hasher::leaf_digest("d");
        let e = hasher::leaf_digest("e");
        let left = hasher::combine(&hasher::combine(&a, &b), &hasher::combine(&c, &c));
        let right = hasher::combine(&hasher::combine(&d, &e), &hasher::combine(&e, &e));
        assert_eq!(*tree.root_digest(), hasher::combine(&left, &right));
    }

    #[test]
    fn test_order_is_part_of_the_commitment() {
        let forward = Tree::from_records(["a", "b"]).unwrap();
        let reversed = Tree::from_records(["b", "a"]).unwrap();
        assert_ne!(forward.root_digest(), reversed.root_digest());
    }

    #[test]
    fn test_push_bytes_validates_encoding() {
        let mut builder = TreeBuilder::new();
        builder.push("ok");

        let err = builder.push_bytes(&[0xff, 0xfe]).unwrap_err();
        match err {
            TreeError::InvalidEncoding { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other:?}"),
        }

        // Valid bytes keep going.
        builder.push_bytes("fine".as_bytes()).unwrap();
        assert_eq!(builder.len(), 2);
    }

    #[test]
    fn test_builder_is_reusable_and_deterministic() {
        let mut builder = TreeBuilder::new();
        builder.push("a").push("b").push("c");

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first.root_digest(), second.root_digest());
        assert_eq!(first.node_count(), second.node_count());
    }
}
