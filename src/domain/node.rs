//! Generic node representation for nested record trees.
//!
//! A [`Node`] is an insertion-ordered mapping from field name to either a
//! string scalar or a sequence of child nodes. The transforms in this crate
//! operate on this shape without knowing any concrete schema; concrete data
//! enters and leaves through the JSON conversion boundary at the bottom of
//! this module.

use serde_json::{Map, Value};

use crate::domain::error::{DomainError, DomainResult};

/// Field name carrying a node's display label.
pub const NAME_FIELD: &str = "name";

/// Value of one node field: a string scalar or an ordered child sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    Nodes(Vec<Node>),
}

impl FieldValue {
    pub fn as_nodes(&self) -> Option<&[Node]> {
        match self {
            FieldValue::Nodes(children) => Some(children),
            FieldValue::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            FieldValue::Nodes(_) => None,
        }
    }
}

/// One record in the tree. Field order is insertion order and is preserved
/// by every transform, so rewriting `name` never disturbs the layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    fields: Vec<(String, FieldValue)>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping insertion order.
    pub fn push(&mut self, key: impl Into<String>, value: FieldValue) {
        self.fields.push((key.into(), value));
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: FieldValue) -> Self {
        self.push(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The node's `name` scalar, if present.
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_FIELD).and_then(FieldValue::as_scalar)
    }

    /// Rewrite the `name` scalar in place; a node without one gains it as
    /// the first field.
    pub fn set_name(&mut self, value: impl Into<String>) {
        let value = FieldValue::Scalar(value.into());
        match self.fields.iter_mut().find(|(k, _)| k == NAME_FIELD) {
            Some((_, slot)) => *slot = value,
            None => self.fields.insert(0, (NAME_FIELD.to_string(), value)),
        }
    }

    /// True if at least one array field holds at least one child.
    pub fn has_populated_sequence(&self) -> bool {
        self.fields
            .iter()
            .any(|(_, v)| matches!(v, FieldValue::Nodes(children) if !children.is_empty()))
    }
}

/// Convert a parsed JSON document into a tree of nodes.
///
/// The top level must be an array of objects; object values must be strings
/// or arrays of objects. Anything else is rejected with
/// [`DomainError::UnsupportedShape`] naming the offending path. Numbers and
/// booleans are not stringified: that would change the data on the way back
/// out through [`tree_to_json`].
pub fn tree_from_json(value: &Value) -> DomainResult<Vec<Node>> {
    sequence_from_json(value, "$")
}

fn sequence_from_json(value: &Value, path: &str) -> DomainResult<Vec<Node>> {
    let items = value.as_array().ok_or_else(|| DomainError::UnsupportedShape {
        path: path.to_string(),
        reason: format!("expected an array, found {}", json_kind(value)),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| node_from_json(item, &format!("{path}[{i}]")))
        .collect()
}

fn node_from_json(value: &Value, path: &str) -> DomainResult<Node> {
    let object = value.as_object().ok_or_else(|| DomainError::UnsupportedShape {
        path: path.to_string(),
        reason: format!("expected an object, found {}", json_kind(value)),
    })?;

    let mut node = Node::new();
    for (key, value) in object {
        let field_path = format!("{path}.{key}");
        match value {
            Value::String(s) => node.push(key, FieldValue::Scalar(s.clone())),
            Value::Array(_) => {
                let children = sequence_from_json(value, &field_path)?;
                node.push(key, FieldValue::Nodes(children));
            }
            other => {
                return Err(DomainError::UnsupportedShape {
                    path: field_path,
                    reason: format!("expected a string or an array, found {}", json_kind(other)),
                })
            }
        }
    }
    Ok(node)
}

/// Convert a tree of nodes back into a JSON document, preserving field order.
pub fn tree_to_json(nodes: &[Node]) -> Value {
    Value::Array(nodes.iter().map(node_to_json).collect())
}

fn node_to_json(node: &Node) -> Value {
    let mut object = Map::new();
    for (key, value) in node.fields() {
        let json = match value {
            FieldValue::Scalar(s) => Value::String(s.clone()),
            FieldValue::Nodes(children) => tree_to_json(children),
        };
        object.insert(key.to_string(), json);
    }
    Value::Object(object)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
