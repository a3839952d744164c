//! Tests for the JSON conversion boundary

use serde_json::json;

use treesift::domain::{tree_from_json, tree_to_json, DomainError, FieldValue, Node};

#[test]
fn given_nested_json_when_converting_then_structure_and_order_survive() {
    // Arrange: animals listed before name, as in the reference dataset
    let value = json!([
        {
            "name": "Dillauti",
            "people": [
                { "animals": [{ "name": "Duck" }], "name": "Ann" }
            ]
        }
    ]);

    // Act
    let tree = tree_from_json(&value).unwrap();

    // Assert
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name(), Some("Dillauti"));
    let people = tree[0].get("people").unwrap().as_nodes().unwrap();
    let keys: Vec<_> = people[0].fields().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["animals", "name"]);

    // Round-trip preserves the document exactly
    assert_eq!(tree_to_json(&tree), value);
}

#[test]
fn given_non_array_top_level_when_converting_then_shape_error() {
    // Act
    let err = tree_from_json(&json!({ "name": "Dillauti" })).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::UnsupportedShape {
            path: "$".into(),
            reason: "expected an array, found an object".into()
        }
    );
}

#[test]
fn given_non_object_item_when_converting_then_error_names_the_path() {
    // Act
    let err = tree_from_json(&json!([{ "people": ["Ann"] }])).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::UnsupportedShape {
            path: "$[0].people[0]".into(),
            reason: "expected an object, found a string".into()
        }
    );
}

#[test]
fn given_numeric_scalar_when_converting_then_rejected() {
    // Arrange: numbers are not silently stringified
    let value = json!([{ "name": "Ann", "age": 40 }]);

    // Act
    let err = tree_from_json(&value).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::UnsupportedShape {
            path: "$[0].age".into(),
            reason: "expected a string or an array, found a number".into()
        }
    );
}

#[test]
fn given_empty_array_field_when_converting_then_empty_sequence() {
    // Act
    let tree = tree_from_json(&json!([{ "name": "Ghost", "people": [] }])).unwrap();

    // Assert
    assert_eq!(tree[0].get("people"), Some(&FieldValue::Nodes(vec![])));
}

#[test]
fn given_hand_built_tree_when_serializing_then_json_matches() {
    // Arrange
    let tree = vec![Node::new()
        .with("name", FieldValue::Scalar("Ann".into()))
        .with("animals", FieldValue::Nodes(vec![]))];

    // Act
    let value = tree_to_json(&tree);

    // Assert
    assert_eq!(value, json!([{ "name": "Ann", "animals": [] }]));
}
