//! CLI presentation: pure formatters over a tree and its enumeration.

use crate::error::AppError;
use crate::tree::builder::Tree;
use crate::tree::view::{self, Enumeration};

/// Pre-order text dump of the whole tree.
///
/// Per node: an orientation line (`Left:`/`Right:` child digests for
/// internal nodes, `Input` for leaves), a `(Padding)` marker when flagged,
/// the digest, the content label, then a blank line. Children follow, left
/// subtree first.
pub fn format_tree_text(tree: &Tree) -> String {
    let mut out = String::new();

    for id in view::preorder(tree) {
        let node = tree.node(id);
        match node.children {
            Some((left, right)) => {
                out.push_str(&format!("Left: {}\n", tree.node(left).digest));
                out.push_str(&format!("Right: {}\n", tree.node(right).digest));
            }
            None => out.push_str("Input\n"),
        }
        if node.padding {
            out.push_str("(Padding)\n");
        }
        out.push_str(&format!("Value: {}\n", node.digest));
        out.push_str(&format!("Content: {}\n\n", node.content));
    }

    out
}

/// JSON export of the enumeration: nodes keyed by structural id with their
/// digest, content label, and padding flag, plus parent→child edge pairs.
pub fn format_enumeration_json(
    tree: &Tree,
    enumeration: &Enumeration,
) -> Result<String, AppError> {
    let nodes: Vec<serde_json::Value> = enumeration
        .nodes
        .iter()
        .map(|&id| {
            let node = tree.node(id);
            serde_json::json!({
                "id": id.index(),
                "digest": node.digest.to_hex(),
                "content": node.content,
                "padding": node.padding,
            })
        })
        .collect();

    let edges: Vec<serde_json::Value> = enumeration
        .edges
        .iter()
        .map(|&(parent, child)| {
            serde_json::json!({ "parent": parent.index(), "child": child.index() })
        })
        .collect();

    let out = serde_json::json!({
        "root": tree.root_digest().to_hex(),
        "nodes": nodes,
        "edges": edges,
    });

    serde_json::to_string_pretty(&out).map_err(|e| AppError::Output(e.to_string()))
}

/// Graphviz DOT export of the enumeration: one node statement per structural
/// id, labeled for rendering, and one edge statement per parent→child pair.
pub fn format_enumeration_dot(tree: &Tree, enumeration: &Enumeration) -> String {
    let mut out = String::from("digraph canopy {\n");
    out.push_str("  node [shape=box];\n");

    for &id in &enumeration.nodes {
        let label = view::display_label(tree.node(id));
        out.push_str(&format!("  n{} [label=\"{}\"];\n", id.index(), escape_dot(&label)));
    }
    for &(parent, child) in &enumeration.edges {
        out.push_str(&format!("  n{} -> n{};\n", parent.index(), child.index()));
    }

    out.push_str("}\n");
    out
}

/// Escape a label for embedding in a double-quoted DOT string.
fn escape_dot(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
