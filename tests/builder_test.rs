//! Tests for TreeBuilder

use nodetree::{Node, TreeBuilder, TreeError};

#[test]
fn given_paths_when_building_then_creates_hierarchy() {
    // Arrange
    let builder = TreeBuilder::new("menu");

    // Act
    let root = builder
        .build_from_paths(["file/open", "file/save", "edit/undo"])
        .unwrap();

    // Assert
    assert_eq!(root.name(), "menu");
    assert_eq!(root.depth(), 3);
    assert_eq!(
        root.path_child(["file", "save"]).unwrap().parent(),
        root.child("file").unwrap()
    );
    assert_eq!(
        root.render(),
        "--menu--\n  --file--\n    --open--\n    --save--\n  --edit--\n    --undo--\n"
    );
}

#[test]
fn given_repeated_path_when_building_then_does_not_duplicate() {
    let root = TreeBuilder::default()
        .build_from_paths(["a/b", "a/b", "a"])
        .unwrap();

    assert_eq!(root.tree_len(), 3);
}

#[test]
fn given_existing_tree_when_inserting_path_then_extends_it() {
    let builder = TreeBuilder::default();
    let root: Node<u8> = Node::new_root(Some("root"));
    Node::new_child(&root, Some("a")).unwrap();

    let leaf = builder.insert_path(&root, "a/b/c").unwrap();

    assert_eq!(leaf.name(), "c");
    assert_eq!(root.path_child(["a", "b", "c"]).unwrap(), leaf);
    assert_eq!(builder.insert_path(&root, "").unwrap(), root);
}

#[test]
fn given_built_tree_when_looking_up_missing_path_then_not_found() {
    let builder = TreeBuilder::default();
    let root = builder.build_from_paths(["a/b"]).unwrap();

    let result = root.path_child(builder.segments("a/x/b"));

    assert_eq!(result, Err(TreeError::NotFound("x".to_string())));
}
