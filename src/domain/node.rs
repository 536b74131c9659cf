//! Node handles over a shared, per-tree arena.
//!
//! Every handle keeps the whole tree alive: a tree is dropped only once no
//! handle to any of its nodes remains. Handles compare by identity (same
//! tree, same slot), never by name or content.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::Index;
use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::domain::arena::{Initializer, TreeArena};
use crate::domain::error::{TreeError, TreeResult};
use crate::domain::interface::NodeInterface;

/// Indentation added per depth level by [`Node::render`].
pub const DEFAULT_INDENT: &str = "  ";
/// Marker wrapped around each name by [`Node::render`].
pub const DEFAULT_MARKER: &str = "--";

type SharedArena<T> = Rc<RefCell<TreeArena<T>>>;

/// A vertex of a rooted tree with uniquely named children.
///
/// Nodes are single-threaded (`!Send`, `!Sync`). Linking happens only at
/// construction time: the new node is registered in its parent's children
/// before the constructor returns, and its parent and root never change.
pub struct Node<T = ()> {
    tree: SharedArena<T>,
    index: Index,
}

impl<T> Node<T> {
    /// Creates a root node when `parent` is `None`, a registered child otherwise.
    ///
    /// Without a `name` a process-unique one is generated.
    pub fn new(parent: Option<&Node<T>>, name: Option<&str>) -> TreeResult<Self> {
        match parent {
            Some(parent) => Self::new_child(parent, name),
            None => Ok(Self::new_root(name)),
        }
    }

    /// Creates the root of a new tree. A root is its own parent and root.
    pub fn new_root(name: Option<&str>) -> Self {
        let name = resolve_name(name);
        debug!(name = %name, "creating root node");
        let tree = TreeArena::with_root(name);
        let index = tree.root();
        Self {
            tree: Rc::new(RefCell::new(tree)),
            index,
        }
    }

    /// Creates a node below `parent` and registers it there.
    ///
    /// Any node flavour of the same tree can be the parent. On failure the
    /// node is discarded and `parent` is left unchanged.
    #[instrument(level = "trace", skip(parent), fields(parent = %parent.name()))]
    pub fn new_child(parent: &impl NodeInterface<Value = T>, name: Option<&str>) -> TreeResult<Self> {
        let parent = parent.as_node();
        let name = resolve_name(name);
        let index = parent.tree.borrow_mut().insert_node(name, parent.index);
        let node = Self {
            tree: Rc::clone(&parent.tree),
            index,
        };

        if let Err(e) = parent.add_child(&node) {
            node.tree.borrow_mut().discard(index);
            return Err(e);
        }
        Ok(node)
    }

    /// Registers `node` as a child of `self` under the node's name.
    ///
    /// Only accepts a non-root node of the same tree whose declared parent
    /// is `self` and whose name is still free. Called by the constructor; it
    /// cannot be used to move nodes around.
    #[instrument(level = "trace", skip(self, node), fields(parent = %self.name(), child = %node.name()))]
    pub fn add_child(&self, node: &Node<T>) -> TreeResult<()> {
        if node.root() != self.root() {
            return Err(TreeError::NotPartOfTree(node.name()));
        }

        // A root is its own parent but never anybody's child
        if node.is_root() || node.parent() != *self {
            return Err(TreeError::DoesNotBelongToParent {
                name: node.name(),
                parent: self.name(),
            });
        }

        let name = node.name();
        if self.has_child(&name) {
            return Err(TreeError::NodeOverwrite(name));
        }

        self.tree.borrow_mut().link(self.index, node.index);
        debug!(child = %name, "registered child");
        Ok(())
    }

    pub fn name(&self) -> String {
        self.tree.borrow().get(self.index).name.clone()
    }

    /// The parent of this node, or the node itself if it is a root.
    pub fn parent(&self) -> Node<T> {
        let parent = self.tree.borrow().get(self.index).parent;
        self.handle(parent)
    }

    pub fn root(&self) -> Node<T> {
        let root = self.tree.borrow().get(self.index).root;
        self.handle(root)
    }

    pub fn is_root(&self) -> bool {
        self.tree.borrow().get(self.index).parent == self.index
    }

    /// Snapshot of the children in insertion order.
    pub fn children(&self) -> IndexMap<String, Node<T>> {
        let tree = self.tree.borrow();
        tree.get(self.index)
            .children
            .iter()
            .map(|(name, &idx)| (name.clone(), self.handle(idx)))
            .collect()
    }

    pub fn child(&self, name: &str) -> TreeResult<Node<T>> {
        let idx = self.tree.borrow().child(self.index, name);
        idx.map(|idx| self.handle(idx))
            .ok_or_else(|| TreeError::NotFound(name.to_string()))
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.tree.borrow().child(self.index, name).is_some()
    }

    /// Follows `path` one child lookup at a time.
    ///
    /// Fails with [`TreeError::NotFound`] at the first missing segment. An
    /// empty path yields `self`.
    pub fn path_child<I, S>(&self, path: I) -> TreeResult<Node<T>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self.clone();
        for segment in path {
            current = current.child(segment.as_ref())?;
        }
        Ok(current)
    }

    /// Number of levels from this node down to its deepest descendant.
    pub fn depth(&self) -> usize {
        self.tree.borrow().depth(self.index)
    }

    /// Names of the leaves below this node, in pre-order.
    pub fn leaf_names(&self) -> Vec<String> {
        self.tree.borrow().leaf_names(self.index)
    }

    /// Number of nodes in the whole tree this node belongs to.
    pub fn tree_len(&self) -> usize {
        self.tree.borrow().len()
    }

    /// Pre-order iterator over this node and its descendants.
    pub fn iter(&self) -> Descendants<T> {
        Descendants {
            tree: Rc::clone(&self.tree),
            stack: vec![self.index],
        }
    }

    /// Indented listing of the whole tree, starting at the root.
    pub fn render(&self) -> String {
        self.render_with(DEFAULT_INDENT, DEFAULT_MARKER)
    }

    pub fn render_with(&self, indent: &str, marker: &str) -> String {
        let tree = self.tree.borrow();
        let mut out = String::new();
        tree.write_lines(tree.root(), 0, indent, marker, &mut out);
        out
    }

    /// Runs `f` on the value slot while the tree is borrowed.
    ///
    /// # Panics
    ///
    /// Panics if `f` creates nodes or writes a value slot of the same tree.
    pub(crate) fn with_value<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        let tree = self.tree.borrow();
        f(tree.get(self.index).value.as_ref())
    }

    pub(crate) fn replace_value(&self, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.tree.borrow_mut().get_mut(self.index).value, value)
    }

    pub(crate) fn initializer(&self) -> Option<Initializer<T>> {
        self.tree.borrow().get(self.index).initializer.clone()
    }

    pub(crate) fn set_initializer(&self, initializer: Option<Initializer<T>>) {
        self.tree.borrow_mut().get_mut(self.index).initializer = initializer;
    }

    fn handle(&self, index: Index) -> Node<T> {
        Node {
            tree: Rc::clone(&self.tree),
            index,
        }
    }
}

static ANONYMOUS_NODES: AtomicU64 = AtomicU64::new(0);

/// Uses `name` or draws a process-unique `node-<n>` name.
fn resolve_name(name: Option<&str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => format!("node-{}", ANONYMOUS_NODES.fetch_add(1, Ordering::Relaxed)),
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        self.handle(self.index)
    }
}

impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.index == other.index
    }
}

impl<T> Eq for Node<T> {}

impl<T> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.tree).hash(state);
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree.try_borrow() {
            Ok(tree) => {
                let record = tree.get(self.index);
                f.debug_struct("Node")
                    .field("name", &record.name)
                    .field("index", &self.index)
                    .field("parent", &record.parent)
                    .field("root", &record.root)
                    .finish()
            }
            Err(_) => f
                .debug_struct("Node")
                .field("index", &self.index)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Pre-order traversal yielding node handles.
pub struct Descendants<T> {
    tree: SharedArena<T>,
    stack: Vec<Index>,
}

impl<T> Iterator for Descendants<T> {
    type Item = Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let tree = self.tree.borrow();
        // Reverse push keeps siblings in insertion order
        self.stack
            .extend(tree.get(current).children.values().rev().copied());
        Some(Node {
            tree: Rc::clone(&self.tree),
            index: current,
        })
    }
}
