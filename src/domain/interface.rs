//! Operation contract shared by all node flavours.

use indexmap::IndexMap;

use crate::domain::error::TreeResult;
use crate::domain::node::Node;

/// Composite tree interface.
///
/// Implementors only provide [`NodeInterface::as_node`]; every operation
/// forwards to the underlying [`Node`].
pub trait NodeInterface {
    /// Type held in the value slot of every node of the tree.
    type Value;

    fn as_node(&self) -> &Node<Self::Value>;

    fn add_child(&self, node: &Node<Self::Value>) -> TreeResult<()> {
        self.as_node().add_child(node)
    }

    fn name(&self) -> String {
        self.as_node().name()
    }

    fn parent(&self) -> Node<Self::Value> {
        self.as_node().parent()
    }

    fn children(&self) -> IndexMap<String, Node<Self::Value>> {
        self.as_node().children()
    }

    fn child(&self, name: &str) -> TreeResult<Node<Self::Value>> {
        self.as_node().child(name)
    }

    fn has_child(&self, name: &str) -> bool {
        self.as_node().has_child(name)
    }

    fn path_child<I, S>(&self, path: I) -> TreeResult<Node<Self::Value>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        self.as_node().path_child(path)
    }

    fn root(&self) -> Node<Self::Value> {
        self.as_node().root()
    }
}

impl<T> NodeInterface for Node<T> {
    type Value = T;

    fn as_node(&self) -> &Node<T> {
        self
    }
}
