//! Integration tests for tree structure correctness

use canopy::tree::builder::Tree;
use canopy::tree::view;

fn records(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("record-{}", i)).collect()
}

/// Leaf positions in left-to-right order.
fn leaf_contents(tree: &Tree) -> Vec<(String, bool)> {
    view::preorder(tree)
        .filter(|&id| tree.node(id).is_leaf())
        .map(|id| {
            let node = tree.node(id);
            (node.content.clone(), node.padding)
        })
        .collect()
}

#[test]
fn test_node_counts_match_full_binary_shape() {
    for n in 1..=12 {
        let tree = Tree::from_records(records(n)).unwrap();
        let leaves = tree.leaf_count();

        // Every internal node has exactly two children, so a tree with L
        // leaf positions has 2L - 1 nodes.
        assert_eq!(tree.node_count(), 2 * leaves - 1, "n = {}", n);
        assert_eq!(
            tree.iter().filter(|(_, node)| !node.is_leaf()).count(),
            leaves - 1,
            "n = {}",
            n
        );
    }
}

#[test]
fn test_leaf_positions_pad_to_power_of_two() {
    for n in 1..=16 {
        let tree = Tree::from_records(records(n)).unwrap();
        let expected = n.next_power_of_two().max(2);
        assert_eq!(tree.leaf_count(), expected, "n = {}", n);
    }
}

#[test]
fn test_real_leaves_preserve_input_order() {
    for n in 1..=12 {
        let input = records(n);
        let tree = Tree::from_records(input.clone()).unwrap();

        let real: Vec<String> = leaf_contents(&tree)
            .into_iter()
            .filter(|(_, padding)| !padding)
            .map(|(content, _)| content)
            .collect();
        assert_eq!(real, input, "n = {}", n);
    }
}

#[test]
fn test_padding_duplicates_left_neighbor() {
    for n in [1, 3, 5, 6, 9, 11] {
        let tree = Tree::from_records(records(n)).unwrap();

        let leaves: Vec<_> = view::preorder(&tree)
            .filter(|&id| tree.node(id).is_leaf())
            .collect();

        for (position, &id) in leaves.iter().enumerate() {
            let node = tree.node(id);
            if node.padding {
                // The first leaf is always a real record, so a padding leaf
                // always has a left neighbor to mirror.
                assert!(position > 0, "n = {}", n);
                let neighbor = tree.node(leaves[position - 1]);
                assert_eq!(node.digest, neighbor.digest, "n = {}", n);
                assert_eq!(node.content, neighbor.content, "n = {}", n);
            }
        }
    }
}

#[test]
fn test_root_content_joins_padded_leaf_row() {
    for n in 1..=10 {
        let tree = Tree::from_records(records(n)).unwrap();

        let joined = leaf_contents(&tree)
            .into_iter()
            .map(|(content, _)| content)
            .collect::<Vec<_>>()
            .join("+");
        assert_eq!(tree.node(tree.root_id()).content, joined, "n = {}", n);
    }
}

#[test]
fn test_padding_count_by_shape() {
    // Odd inputs that pad to a power of two gain exactly one padding leaf;
    // five records exercise the per-level rule and gain three.
    for (n, expected) in [(1, 1), (3, 1), (7, 1), (5, 3)] {
        let tree = Tree::from_records(records(n)).unwrap();
        let padding = tree.iter().filter(|(_, node)| node.padding).count();
        assert_eq!(padding, expected, "n = {}", n);
    }

    // Even inputs that split into even halves all the way down need none.
    for n in [2, 4, 8, 16] {
        let tree = Tree::from_records(records(n)).unwrap();
        assert_eq!(
            tree.iter().filter(|(_, node)| node.padding).count(),
            0,
            "n = {}",
            n
        );
    }
}
