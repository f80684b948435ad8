/*
Hierarchical rendering through termtree.

Only present children become leaves; operator nodes always have both, so
expression trees print every operand.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::binary_tree::{BinaryTree, Node};
use crate::domain::expression_tree::ExpressionTree;

pub trait TreeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeConvert for Node<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = [self.left(), self.right()]
            .into_iter()
            .flatten()
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(self.value().to_string()).with_leaves(leaves)
    }
}

impl<T: Display> TreeConvert for BinaryTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl TreeConvert for ExpressionTree {
    fn to_tree_string(&self) -> Tree<String> {
        self.binary_tree().to_tree_string()
    }
}
