//! Rendering of transformed trees to stdout

use itertools::Itertools;
use termtree::Tree;

use crate::domain::{tree_to_json, FieldValue, Node, NAME_FIELD};

/// Render the tree as pretty-printed JSON, field order preserved.
pub fn render_json(nodes: &[Node]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&tree_to_json(nodes))
}

/// Render the tree as an ASCII tree of labels.
///
/// Each node shows its `name` (annotated names include their count
/// suffixes); other scalar fields are listed after it. Array fields become
/// intermediate branches labelled with the field name.
pub fn render_tree(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node_to_tree(node).to_string())
        .collect()
}

fn node_to_tree(node: &Node) -> Tree<String> {
    let leaves: Vec<_> = node
        .fields()
        .filter_map(|(key, value)| match value {
            FieldValue::Nodes(children) => {
                let branch = Tree::new(key.to_string())
                    .with_leaves(children.iter().map(node_to_tree));
                Some(branch)
            }
            FieldValue::Scalar(_) => None,
        })
        .collect();

    Tree::new(node_label(node)).with_leaves(leaves)
}

fn node_label(node: &Node) -> String {
    let name = node.name().unwrap_or("(unnamed)");
    let extra_scalars = node
        .fields()
        .filter(|(key, value)| *key != NAME_FIELD && value.as_scalar().is_some())
        .map(|(key, value)| format!("{}={}", key, value.as_scalar().unwrap_or_default()))
        .join(", ");

    if extra_scalars.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({extra_scalars})")
    }
}
