//! Named composite trees.
//!
//! A [`Node`] is a vertex of a rooted tree. It has a name that is unique
//! among its siblings, a parent (itself for a root), a cached root and an
//! insertion-ordered set of named children. Nodes are linked exactly once,
//! when they are constructed; there is no way to move or detach them.
//!
//! ```
//! use nodetree::{Node, TreeError};
//!
//! let root: Node = Node::new_root(Some("root"));
//! let x = Node::new_child(&root, Some("x")).unwrap();
//! Node::new_child(&x, Some("y")).unwrap();
//!
//! assert_eq!(root.path_child(["x", "y"]).unwrap().parent(), x);
//! assert_eq!(
//!     Node::new_child(&root, Some("x")),
//!     Err(TreeError::NodeOverwrite("x".into()))
//! );
//! assert_eq!(root.render(), "--root--\n  --x--\n    --y--\n");
//! ```
//!
//! [`ContentNode`] and [`PayloadNode`] add a value slot to a node; the
//! latter can derive its payload from an initializer.
//!
//! The `cli` feature (on by default) adds the `nodetree` binary together
//! with its `application`, `cli` and `config` support modules. Build
//! with `default-features = false` for the tree library alone.

#[cfg(feature = "cli")]
pub mod application;
#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod config;
pub mod domain;
#[cfg(feature = "cli")]
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    ContentNode, Descendants, Initializer, Node, NodeInterface, PayloadNode, TreeBuilder,
    TreeError, TreeResult,
};
pub use tree_traits::TreeNodeConvert;
