//! Tests for the recursive annotator

use treesift::domain::{annotate, FieldValue, Node};

fn leaf(name: &str) -> Node {
    Node::new().with("name", FieldValue::Scalar(name.into()))
}

fn person(name: &str, animals: &[&str]) -> Node {
    Node::new()
        .with("name", FieldValue::Scalar(name.into()))
        .with(
            "animals",
            FieldValue::Nodes(animals.iter().map(|a| leaf(a)).collect()),
        )
}

#[test]
fn given_nested_tree_when_annotating_then_every_level_gains_counts() {
    // Arrange
    let tree = vec![Node::new()
        .with("name", FieldValue::Scalar("Dillauti".into()))
        .with(
            "people",
            FieldValue::Nodes(vec![
                person("Ann", &["Duck", "Cat"]),
                person("Bob", &["Cobra"]),
            ]),
        )];

    // Act
    let result = annotate(&tree);

    // Assert
    assert_eq!(result[0].name(), Some("Dillauti [2]"));
    let people = result[0].get("people").unwrap().as_nodes().unwrap();
    assert_eq!(people[0].name(), Some("Ann [2]"));
    assert_eq!(people[1].name(), Some("Bob [1]"));
}

#[test]
fn given_leaf_without_sequences_when_annotating_then_label_unchanged() {
    // Act
    let result = annotate(&[leaf("Duck")]);

    // Assert
    assert_eq!(result, vec![leaf("Duck")]);
}

#[test]
fn given_node_with_multiple_sequences_when_annotating_then_one_suffix_each() {
    // Arrange
    let tree = vec![Node::new()
        .with("name", FieldValue::Scalar("Dillauti".into()))
        .with("cities", FieldValue::Nodes(vec![leaf("Oln")]))
        .with(
            "people",
            FieldValue::Nodes(vec![person("Ann", &["Duck"]), person("Bob", &["Cat"])]),
        )];

    // Act
    let result = annotate(&tree);

    // Assert: suffixes accumulate in field-processing order
    assert_eq!(result[0].name(), Some("Dillauti [1] [2]"));
}

#[test]
fn given_node_without_name_when_annotating_then_empty_name_is_suffixed() {
    // Arrange
    let tree = vec![Node::new().with("people", FieldValue::Nodes(vec![leaf("Ann")]))];

    // Act
    let result = annotate(&tree);

    // Assert: the name field appears, holding only the suffix
    assert_eq!(result[0].name(), Some(" [1]"));
    let keys: Vec<_> = result[0].fields().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["name", "people"]);
}

#[test]
fn given_empty_sequence_when_annotating_then_zero_count() {
    // Arrange
    let tree = vec![Node::new()
        .with("name", FieldValue::Scalar("Ghost".into()))
        .with("people", FieldValue::Nodes(vec![]))];

    // Act
    let result = annotate(&tree);

    // Assert
    assert_eq!(result[0].name(), Some("Ghost [0]"));
}

#[test]
fn given_tree_when_annotating_then_field_order_preserved() {
    // Arrange: animals listed before name, as in the reference dataset
    let tree = vec![Node::new()
        .with("animals", FieldValue::Nodes(vec![leaf("Duck")]))
        .with("name", FieldValue::Scalar("Ann".into()))];

    // Act
    let result = annotate(&tree);

    // Assert: rewriting the name does not move it
    let keys: Vec<_> = result[0].fields().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["animals", "name"]);
    assert_eq!(result[0].name(), Some("Ann [1]"));
}

#[test]
fn given_tree_when_annotating_then_input_is_untouched() {
    // Arrange
    let tree = vec![person("Ann", &["Duck"])];
    let snapshot = tree.clone();

    // Act
    let _ = annotate(&tree);

    // Assert: pure transform, input replaced only by derived copies
    assert_eq!(tree, snapshot);
}
