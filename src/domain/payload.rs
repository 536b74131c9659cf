//! Nodes carrying a value slot next to their tree linkage.
//!
//! The slot lives in the node's record, so a [`Node`] returned by a lookup
//! can be turned back into a [`ContentNode`] or [`PayloadNode`] view without
//! losing its value. The value never affects naming, linking or lookup.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tracing::instrument;

use crate::domain::arena::Initializer;
use crate::domain::error::TreeResult;
use crate::domain::interface::NodeInterface;
use crate::domain::node::Node;

/// Node with a plain, freely settable content value.
pub struct ContentNode<T = ()> {
    node: Node<T>,
}

impl<T> ContentNode<T> {
    pub fn new(parent: Option<&Node<T>>, name: Option<&str>, content: Option<T>) -> TreeResult<Self> {
        let node = Node::new(parent, name)?;
        node.replace_value(content);
        Ok(Self { node })
    }

    /// Creates a content node below any node flavour of the same tree.
    pub fn new_child(
        parent: &impl NodeInterface<Value = T>,
        name: Option<&str>,
        content: Option<T>,
    ) -> TreeResult<Self> {
        let node = Node::new_child(parent, name)?;
        node.replace_value(content);
        Ok(Self { node })
    }

    pub fn set_content(&self, content: Option<T>) {
        self.node.replace_value(content);
    }

    pub fn content(&self) -> Option<T>
    where
        T: Clone,
    {
        self.node.with_value(|content| content.cloned())
    }

    /// Borrows the content for the duration of `f`.
    ///
    /// # Panics
    ///
    /// The whole tree stays borrowed while `f` runs: creating nodes in it or
    /// setting any of its values from within `f` panics. Reading is fine.
    pub fn with_content<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.node.with_value(f)
    }

    pub fn into_node(self) -> Node<T> {
        self.node
    }
}

/// Node with a payload that can be (re)derived from an initializer.
///
/// If no payload is given at construction the initializer runs right away,
/// so a fresh node never sits in an uninitialized state. The initializer is
/// otherwise only invoked by [`PayloadNode::reset`].
pub struct PayloadNode<T = ()> {
    node: Node<T>,
}

impl<T> PayloadNode<T> {
    pub fn new(parent: Option<&Node<T>>, name: Option<&str>, payload: Option<T>) -> TreeResult<Self> {
        Self::build(parent, name, payload, None)
    }

    /// Creates a payload node below any node flavour of the same tree.
    pub fn new_child(
        parent: &impl NodeInterface<Value = T>,
        name: Option<&str>,
        payload: Option<T>,
        initializer: Option<Initializer<T>>,
    ) -> TreeResult<Self> {
        let node = Node::new_child(parent, name)?;
        Ok(Self::attach(node, payload, initializer))
    }

    /// Shorthand for [`PayloadNode::build`] with an initializer that always
    /// produces a payload.
    pub fn with_initializer<F>(
        parent: Option<&Node<T>>,
        name: Option<&str>,
        payload: Option<T>,
        initializer: F,
    ) -> TreeResult<Self>
    where
        F: Fn() -> T + 'static,
    {
        let initializer: Initializer<T> = Rc::new(move || Some(initializer()));
        Self::build(parent, name, payload, Some(initializer))
    }

    /// Links the node first; the initializer is not run if linking fails.
    ///
    /// An initializer returning `None` leaves the payload absent.
    pub fn build(
        parent: Option<&Node<T>>,
        name: Option<&str>,
        payload: Option<T>,
        initializer: Option<Initializer<T>>,
    ) -> TreeResult<Self> {
        let node = Node::new(parent, name)?;
        Ok(Self::attach(node, payload, initializer))
    }

    fn attach(node: Node<T>, payload: Option<T>, initializer: Option<Initializer<T>>) -> Self {
        node.replace_value(payload);
        node.set_initializer(initializer);

        let this = Self { node };
        if !this.has() {
            this.init();
        }
        this
    }

    pub fn has(&self) -> bool {
        self.node.with_value(|payload| payload.is_some())
    }

    pub fn get(&self) -> Option<T>
    where
        T: Clone,
    {
        self.node.with_value(|payload| payload.cloned())
    }

    /// Borrows the payload for the duration of `f`.
    ///
    /// # Panics
    ///
    /// Same restriction as [`ContentNode::with_content`]: `f` may read the
    /// tree but must not create nodes or set values in it.
    pub fn with_payload<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        self.node.with_value(f)
    }

    /// Replaces the payload and hands back the previous one.
    pub fn set(&self, payload: Option<T>) -> Option<T> {
        self.node.replace_value(payload)
    }

    /// Re-derives the payload from the initializer, or clears it if there is
    /// none, and hands back the previous one.
    #[instrument(level = "trace", skip(self), fields(node = %self.node.name()))]
    pub fn reset(&self) -> Option<T> {
        self.init()
    }

    pub fn has_initializer(&self) -> bool {
        self.node.initializer().is_some()
    }

    pub fn into_node(self) -> Node<T> {
        self.node
    }

    fn init(&self) -> Option<T> {
        // No borrow is held while the initializer runs
        let fresh = self.node.initializer().and_then(|initializer| initializer());
        self.node.replace_value(fresh)
    }
}

macro_rules! node_view {
    ($view:ident) => {
        impl<T> Deref for $view<T> {
            type Target = Node<T>;

            fn deref(&self) -> &Node<T> {
                &self.node
            }
        }

        impl<T> NodeInterface for $view<T> {
            type Value = T;

            fn as_node(&self) -> &Node<T> {
                &self.node
            }
        }

        impl<T> From<Node<T>> for $view<T> {
            fn from(node: Node<T>) -> Self {
                Self { node }
            }
        }

        impl<T> Clone for $view<T> {
            fn clone(&self) -> Self {
                Self {
                    node: self.node.clone(),
                }
            }
        }

        impl<T> PartialEq for $view<T> {
            fn eq(&self, other: &Self) -> bool {
                self.node == other.node
            }
        }

        impl<T> Eq for $view<T> {}

        impl<T> fmt::Debug for $view<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($view)).field(&self.node).finish()
            }
        }
    };
}

node_view!(ContentNode);
node_view!(PayloadNode);
