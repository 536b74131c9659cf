use std::fmt;
use std::rc::Rc;

use generational_arena::{Arena, Index};
use indexmap::IndexMap;
use tracing::instrument;

/// Zero-argument function producing a fresh payload for a node.
///
/// Returning `None` leaves the payload absent.
pub type Initializer<T> = Rc<dyn Fn() -> Option<T>>;

/// Record stored in the arena for every node of one tree.
pub struct NodeRecord<T> {
    /// Name under which the node is registered in its parent
    pub name: String,
    /// Index of the parent, equal to the node's own index for the root
    pub parent: Index,
    /// Index of the tree's root
    pub root: Index,
    /// Children keyed by name, in insertion order
    pub children: IndexMap<String, Index>,
    /// Attached value slot, `None` when absent
    pub value: Option<T>,
    /// Payload initializer, `None` when the node has none
    pub initializer: Option<Initializer<T>>,
}

impl<T> NodeRecord<T> {
    fn new(name: String, parent: Index, root: Index) -> Self {
        Self {
            name,
            parent,
            root,
            children: IndexMap::new(),
            value: None,
            initializer: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRecord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRecord")
            .field("name", &self.name)
            .field("parent", &self.parent)
            .field("root", &self.root)
            .field("children", &self.children)
            .field("value", &self.value)
            .field("initializer", &self.initializer.is_some())
            .finish()
    }
}

/// Arena holding every node of a single tree.
///
/// A tree always has exactly one root, created together with the arena.
/// Records are only ever appended; the single removal path is the rollback
/// of a node whose registration into its parent failed.
#[derive(Debug)]
pub struct TreeArena<T> {
    arena: Arena<NodeRecord<T>>,
    root: Index,
}

impl<T> TreeArena<T> {
    /// Creates an arena containing only the root node.
    pub fn with_root(name: String) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert_with(|idx| NodeRecord::new(name, idx, idx));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, idx: Index) -> bool {
        self.arena.contains(idx)
    }

    /// Inserts an unregistered record below `parent`.
    ///
    /// The parent's children are left untouched; see [`TreeArena::link`].
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, name: String, parent: Index) -> Index {
        let root = self.root;
        self.arena.insert_with(|_| NodeRecord::new(name, parent, root))
    }

    /// Drops a record that never made it into its parent's children.
    #[instrument(level = "trace", skip(self))]
    pub fn discard(&mut self, idx: Index) {
        self.arena.remove(idx);
    }

    /// Registers `child` in the children of `parent` under the child's name.
    pub fn link(&mut self, parent: Index, child: Index) {
        let name = self.get(child).name.clone();
        self.get_mut(parent).children.insert(name, child);
    }

    /// Record at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` was discarded. Discarded indices never leave
    /// [`Node::new_child`](crate::domain::Node::new_child), so every index
    /// held by a handle is live.
    pub fn get(&self, idx: Index) -> &NodeRecord<T> {
        debug_assert!(self.arena.contains(idx), "stale node index {idx:?}");
        &self.arena[idx]
    }

    /// Mutable record at `idx`. Panics like [`TreeArena::get`].
    pub fn get_mut(&mut self, idx: Index) -> &mut NodeRecord<T> {
        debug_assert!(self.arena.contains(idx), "stale node index {idx:?}");
        &mut self.arena[idx]
    }

    /// Looks up a registered child of `parent` by name.
    pub fn child(&self, parent: Index, name: &str) -> Option<Index> {
        self.get(parent).children.get(name).copied()
    }

    /// Number of levels from `idx` down to its deepest descendant, counting `idx`.
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self, idx: Index) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(idx, 1)];
        while let Some((current, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(
                self.get(current)
                    .children
                    .values()
                    .map(|&child| (child, level + 1)),
            );
        }
        deepest
    }

    /// Names of all leaf nodes below (and including) `idx`, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self, idx: Index) -> Vec<String> {
        let mut leaves = Vec::new();
        let mut stack = vec![idx];
        while let Some(current) = stack.pop() {
            let node = self.get(current);
            if node.children.is_empty() {
                leaves.push(node.name.clone());
            } else {
                stack.extend(node.children.values().rev().copied());
            }
        }
        leaves
    }

    /// Appends one line per node of the subtree at `idx` to `out`, depth first.
    ///
    /// `depth` is the indentation level of `idx` itself.
    pub fn write_lines(
        &self,
        idx: Index,
        depth: usize,
        indent: &str,
        marker: &str,
        out: &mut String,
    ) {
        let mut stack = vec![(idx, depth)];
        while let Some((current, level)) = stack.pop() {
            let node = self.get(current);
            for _ in 0..level {
                out.push_str(indent);
            }
            out.push_str(marker);
            out.push_str(&node.name);
            out.push_str(marker);
            out.push('\n');

            // Reverse push keeps siblings in insertion order
            stack.extend(node.children.values().rev().map(|&child| (child, level + 1)));
        }
    }
}
