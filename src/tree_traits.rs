use termtree::Tree;
use tracing::instrument;

use crate::domain::{Node, NodeInterface};

/// Conversion of a subtree into a `termtree` box-drawing view.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<N: NodeInterface> TreeNodeConvert for N {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        // Pre-order list of (node, position of its parent in the list)
        let mut order: Vec<(Node<N::Value>, Option<usize>)> = Vec::new();
        let mut stack = vec![(self.as_node().clone(), None)];
        while let Some((node, parent)) = stack.pop() {
            let position = order.len();
            stack.extend(
                node.children()
                    .into_values()
                    .rev()
                    .map(|child| (child, Some(position))),
            );
            order.push((node, parent));
        }

        // Children come after their parent, so folding backwards completes
        // every subtree before it is attached
        let mut leaves: Vec<Vec<Tree<String>>> = order.iter().map(|_| Vec::new()).collect();
        let mut top = None;
        for (position, (node, parent)) in order.iter().enumerate().rev() {
            let mut own = std::mem::take(&mut leaves[position]);
            own.reverse();
            let tree = Tree::new(node.name()).with_leaves(own);
            match parent {
                Some(parent) => leaves[*parent].push(tree),
                None => top = Some(tree),
            }
        }
        top.unwrap_or_else(|| Tree::new(self.name()))
    }
}
