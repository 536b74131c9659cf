//! Tree builder turning separator-delimited paths into a node hierarchy.

use tracing::{debug, instrument};

use crate::domain::error::TreeResult;
use crate::domain::node::Node;

/// Constructs a tree from paths such as `menu/file/open`.
///
/// Missing intermediate nodes are created on the way; segments that
/// already exist are reused, so paths sharing a prefix share nodes.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    root_name: String,
    separator: char,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new("root")
    }
}

impl TreeBuilder {
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            separator: '/',
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Splits a path into its non-empty segments.
    pub fn segments<'a>(&self, path: &'a str) -> Vec<&'a str> {
        path.split(self.separator)
            .filter(|segment| !segment.is_empty())
            .collect()
    }

    /// Build one tree holding every path below a fresh root.
    #[instrument(level = "debug", skip(self, paths), fields(root = %self.root_name))]
    pub fn build_from_paths<I, S>(&self, paths: I) -> TreeResult<Node>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let root = Node::new_root(Some(self.root_name.as_str()));
        for path in paths {
            self.insert_path(&root, path.as_ref())?;
        }
        debug!(nodes = root.tree_len(), "built tree");
        Ok(root)
    }

    /// Walks `path` below `base`, creating nodes that do not exist yet.
    ///
    /// Returns the node for the last segment, or `base` for an empty path.
    pub fn insert_path<T>(&self, base: &Node<T>, path: &str) -> TreeResult<Node<T>> {
        let mut current = base.clone();
        for segment in self.segments(path) {
            current = if current.has_child(segment) {
                current.child(segment)?
            } else {
                Node::new_child(&current, Some(segment))?
            };
        }
        Ok(current)
    }
}
