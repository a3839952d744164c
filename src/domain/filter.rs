//! Recursive pattern filter over nested node trees.

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{FieldValue, Node};

/// Prune a tree to the branches whose `target_field` children match every
/// pattern.
///
/// The target field may sit at any depth; the walk applies uniformly at
/// every level. Children of the target field are kept when their `name`
/// contains **all** patterns as substrings (case-sensitive). After a node is
/// rebuilt, it survives only if at least one of its array fields is still
/// populated, so branches that filtered down to nothing disappear entirely
/// rather than lingering as empty containers.
///
/// Order is preserved at every level, and the result is always an
/// order-preserving subsequence of the input. With no patterns every child
/// trivially matches and the tree passes through structurally unchanged.
///
/// Fails with [`DomainError::MissingFilterKey`] when `target_field` is
/// empty: filtering requires an explicit target.
#[instrument(level = "debug", skip(tree))]
pub fn filter(tree: &[Node], patterns: &[String], target_field: &str) -> DomainResult<Vec<Node>> {
    if target_field.is_empty() {
        return Err(DomainError::MissingFilterKey);
    }
    Ok(filter_level(tree, patterns, target_field))
}

fn filter_level(nodes: &[Node], patterns: &[String], target: &str) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| rebuild_node(node, patterns, target))
        .filter(Node::has_populated_sequence)
        .collect()
}

fn rebuild_node(node: &Node, patterns: &[String], target: &str) -> Node {
    let mut rebuilt = Node::new();
    for (key, value) in node.fields() {
        let value = match value {
            FieldValue::Nodes(children) if key == target => FieldValue::Nodes(
                children
                    .iter()
                    .filter(|child| matches_all(child, patterns))
                    .cloned()
                    .collect(),
            ),
            FieldValue::Nodes(children) => {
                FieldValue::Nodes(filter_level(children, patterns, target))
            }
            FieldValue::Scalar(s) => FieldValue::Scalar(s.clone()),
        };
        rebuilt.push(key, value);
    }
    rebuilt
}

/// AND semantics: a child is kept only if its name contains every pattern.
/// A missing name behaves as the empty string, so it matches nothing unless
/// the pattern list itself is empty.
fn matches_all(node: &Node, patterns: &[String]) -> bool {
    let name = node.name().unwrap_or_default();
    patterns.iter().all(|pattern| name.contains(pattern.as_str()))
}
