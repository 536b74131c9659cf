//! Domain-level errors raised while linking and looking up nodes

use thiserror::Error;

/// Violations of the tree's linking rules and failed lookups.
///
/// Every variant is raised at the point of violation; nothing is retried
/// and the tree is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node '{0}' does not belong to this tree")]
    NotPartOfTree(String),

    #[error("node '{name}' does not belong to parent '{parent}'")]
    DoesNotBelongToParent { name: String, parent: String },

    #[error("a child with the name '{0}' already exists")]
    NodeOverwrite(String),

    #[error("no child named '{0}'")]
    NotFound(String),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
