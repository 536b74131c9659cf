//! Domain layer: the tree, its nodes and their linking rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod error;
pub mod interface;
pub mod node;
pub mod payload;

pub use arena::{Initializer, TreeArena};
pub use builder::TreeBuilder;
pub use error::{TreeError, TreeResult};
pub use interface::NodeInterface;
pub use node::{Descendants, Node, DEFAULT_INDENT, DEFAULT_MARKER};
pub use payload::{ContentNode, PayloadNode};
