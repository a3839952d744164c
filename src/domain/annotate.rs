//! Recursive count annotation of parent labels.

use tracing::instrument;

use crate::domain::node::{FieldValue, Node};

/// Append a `" [<N>]"` suffix to every node's name for each of its array
/// fields, where N is that field's length after annotation.
///
/// Children are annotated first, then each array field contributes one
/// suffix in field-processing order, so a node with several child sequences
/// accumulates several suffixes. Run after [`filter`](crate::domain::filter)
/// the counts reflect post-filter cardinality.
///
/// A node without a `name` field is treated as carrying the empty string and
/// gains the field; leaf nodes with no array fields keep their label as-is.
/// Infallible and purely structural.
#[instrument(level = "debug", skip(tree))]
pub fn annotate(tree: &[Node]) -> Vec<Node> {
    tree.iter().map(annotate_node).collect()
}

fn annotate_node(node: &Node) -> Node {
    let mut name = node.name().unwrap_or_default().to_string();
    let mut rebuilt = Node::new();

    for (key, value) in node.fields() {
        match value {
            FieldValue::Nodes(children) => {
                let children = annotate(children);
                name.push_str(&format!(" [{}]", children.len()));
                rebuilt.push(key, FieldValue::Nodes(children));
            }
            FieldValue::Scalar(s) => rebuilt.push(key, FieldValue::Scalar(s.clone())),
        }
    }

    rebuilt.set_name(name);
    rebuilt
}
