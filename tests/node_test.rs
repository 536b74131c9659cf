//! Tests for Node linking, lookup and identity

use rstest::{fixture, rstest};

use nodetree::util::testing::init_test_setup;
use nodetree::{Node, NodeInterface, TreeError};

// root
// ├── a
// │   └── b
// │       └── c
// └── d
#[fixture]
fn tree() -> Node {
    init_test_setup();
    let root = Node::new_root(Some("root"));
    let a = Node::new_child(&root, Some("a")).unwrap();
    let b = Node::new_child(&a, Some("b")).unwrap();
    Node::new_child(&b, Some("c")).unwrap();
    Node::new_child(&root, Some("d")).unwrap();
    root
}

// ============================================================
// Root and parent linkage
// ============================================================

#[rstest]
fn given_any_node_when_getting_root_twice_then_root_is_fixed_point(tree: Node) {
    for node in tree.iter() {
        assert_eq!(node.root().root(), node.root());
        assert_eq!(node.root(), tree);
    }
}

#[rstest]
fn given_root_when_getting_parent_then_returns_itself(tree: Node) {
    assert_eq!(tree.parent(), tree);
    assert!(tree.is_root());

    let other: Node = Node::new(None, Some("other")).unwrap();
    assert_eq!(other.parent(), other);
    assert_eq!(other.root(), other);
}

#[rstest]
#[case("x")]
#[case("with space")]
#[case("")]
fn given_child_when_constructed_then_is_registered_in_parent(#[case] name: &str) {
    // Arrange
    let parent: Node = Node::new_root(Some("p"));

    // Act
    let child = Node::new(Some(&parent), Some(name)).unwrap();

    // Assert
    assert_eq!(parent.child(name).unwrap(), child);
    assert!(parent.has_child(name));
    assert_eq!(child.parent(), parent);
    assert_eq!(child.root(), parent.root());
    assert!(!child.is_root());
}

#[rstest]
fn given_parent_chain_when_followed_then_reaches_root(tree: Node) {
    let c = tree.path_child(["a", "b", "c"]).unwrap();

    let mut current = c;
    let mut hops = 0;
    while !current.is_root() {
        current = current.parent();
        hops += 1;
    }

    assert_eq!(current, tree);
    assert_eq!(hops, 3);
}

// ============================================================
// Registration failures
// ============================================================

#[rstest]
fn given_taken_name_when_constructing_sibling_then_fails_with_overwrite(tree: Node) {
    // Arrange
    let before: Vec<String> = tree.children().keys().cloned().collect();
    let original = tree.child("a").unwrap();

    // Act
    let result = Node::new_child(&tree, Some("a"));

    // Assert
    assert_eq!(result, Err(TreeError::NodeOverwrite("a".to_string())));
    let after: Vec<String> = tree.children().keys().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(tree.child("a").unwrap(), original);
    assert_eq!(tree.tree_len(), 5);
}

#[rstest]
fn given_node_of_other_tree_when_adding_then_fails_with_not_part_of_tree(tree: Node) {
    let r2: Node = Node::new_root(Some("r2"));
    let foreign = Node::new_child(&r2, Some("foreign")).unwrap();

    let result = tree.add_child(&foreign);

    assert_eq!(result, Err(TreeError::NotPartOfTree("foreign".to_string())));
    assert!(!tree.has_child("foreign"));
}

#[rstest]
fn given_other_root_when_adding_then_fails_with_not_part_of_tree(tree: Node) {
    let r2: Node = Node::new_root(Some("r2"));

    assert!(matches!(tree.add_child(&r2), Err(TreeError::NotPartOfTree(_))));
}

#[rstest]
fn given_node_of_other_parent_when_adding_then_fails_with_does_not_belong(tree: Node) {
    let grandchild = tree.path_child(["a", "b"]).unwrap();

    let result = tree.add_child(&grandchild);

    assert_eq!(
        result,
        Err(TreeError::DoesNotBelongToParent {
            name: "b".to_string(),
            parent: "root".to_string(),
        })
    );
    assert!(!tree.has_child("b"));
}

#[rstest]
fn given_registered_child_when_adding_again_then_fails_with_overwrite(tree: Node) {
    let d = tree.child("d").unwrap();

    assert_eq!(
        tree.add_child(&d),
        Err(TreeError::NodeOverwrite("d".to_string()))
    );
    assert_eq!(tree.children().len(), 2);
}

#[rstest]
fn given_root_when_adding_to_itself_then_fails_with_does_not_belong() {
    let root: Node = Node::new_root(Some("solo"));

    assert_eq!(
        root.add_child(&root),
        Err(TreeError::DoesNotBelongToParent {
            name: "solo".to_string(),
            parent: "solo".to_string(),
        })
    );
    assert!(root.children().is_empty());
}

// ============================================================
// Lookup
// ============================================================

#[rstest]
fn given_existing_path_when_resolving_then_equals_chained_lookups(tree: Node) {
    let chained = tree
        .child("a")
        .and_then(|a| a.child("b"))
        .and_then(|b| b.child("c"))
        .unwrap();

    assert_eq!(tree.path_child(["a", "b", "c"]).unwrap(), chained);
    assert_eq!(tree.path_child(Vec::<String>::new()).unwrap(), tree);
}

#[rstest]
#[case(&["missing"], "missing")]
#[case(&["a", "missing", "c"], "missing")]
#[case(&["a", "b", "c", "deeper"], "deeper")]
#[case(&["d", "a"], "a")]
fn given_missing_segment_when_resolving_then_fails_at_first_miss(
    tree: Node,
    #[case] path: &[&str],
    #[case] missing: &str,
) {
    assert_eq!(
        tree.path_child(path),
        Err(TreeError::NotFound(missing.to_string()))
    );
}

#[rstest]
fn given_missing_name_when_getting_child_then_fails_without_mutation(tree: Node) {
    let len = tree.tree_len();

    assert_eq!(
        tree.child("missing"),
        Err(TreeError::NotFound("missing".to_string()))
    );
    assert!(!tree.has_child("missing"));
    assert_eq!(tree.tree_len(), len);
}

#[rstest]
fn given_children_snapshot_when_modified_then_tree_is_unchanged(tree: Node) {
    let mut snapshot = tree.children();
    snapshot.shift_remove("a");
    snapshot.clear();

    assert_eq!(tree.children().len(), 2);
    assert!(tree.has_child("a"));
}

#[rstest]
fn given_children_when_listing_then_keeps_insertion_order() {
    let root: Node = Node::new_root(Some("root"));
    for name in ["zeta", "alpha", "mid"] {
        Node::new_child(&root, Some(name)).unwrap();
    }

    let names: Vec<String> = root.children().keys().cloned().collect();

    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

// ============================================================
// Interface and helpers
// ============================================================

fn describe<N: NodeInterface>(node: &N) -> String {
    format!("{} ({} children)", node.name(), node.children().len())
}

#[rstest]
fn given_node_when_used_through_interface_then_forwards(tree: Node) {
    assert_eq!(describe(&tree), "root (2 children)");
    assert_eq!(
        NodeInterface::path_child(&tree, ["a", "b"]).unwrap().name(),
        "b"
    );
}

#[rstest]
fn given_tree_when_measuring_then_reports_depth_and_leaves(tree: Node) {
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.leaf_names(), vec!["c".to_string(), "d".to_string()]);
    assert_eq!(tree.child("d").unwrap().depth(), 1);
}

#[test]
fn given_only_child_handle_when_root_dropped_then_tree_stays_alive() {
    let leaf = {
        let root: Node = Node::new_root(Some("root"));
        let a = Node::new_child(&root, Some("a")).unwrap();
        Node::new_child(&a, Some("leaf")).unwrap()
    };

    assert_eq!(leaf.root().name(), "root");
    assert_eq!(leaf.parent().name(), "a");
    assert_eq!(leaf.tree_len(), 3);
}
