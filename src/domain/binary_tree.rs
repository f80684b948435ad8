//! Generic binary tree with exclusively owned child links.
//!
//! Nodes are created once and never mutated; every structural query is a
//! plain recursion over `Option<Box<Node<T>>>` links, so stack use grows with
//! the height of the tree.

use std::fmt;
use std::iter;

use itertools::Itertools;
use tracing::instrument;

/// Marker printed for absent slots by [`BinaryTree::render`].
pub const ABSENT_SLOT: &str = "null";

/// Deepest level whose slots are materialized. Level `k` holds `2^k` slots.
pub const MAX_LEVEL: usize = 12;

/// A tree vertex owning its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn new(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn leaf(value: T) -> Self {
        Self::new(value, None, None)
    }

    pub fn branch(value: T, left: Node<T>, right: Node<T>) -> Self {
        Self::new(value, Some(left), Some(right))
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Rooted binary tree, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Option<Node<T>>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Node<T>> for BinaryTree<T> {
    fn from(root: Node<T>) -> Self {
        Self::new(Some(root))
    }
}

impl<T> BinaryTree<T> {
    pub fn new(root: Option<Node<T>>) -> Self {
        Self { root }
    }

    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of present nodes.
    pub fn len(&self) -> usize {
        fn count<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| 1 + count(n.left()) + count(n.right()))
        }
        count(self.root())
    }

    /// Edges on the longest root-to-leaf path; `-1` for an empty tree.
    #[instrument(level = "trace", skip(self))]
    pub fn height(&self) -> isize {
        fn height<T>(node: Option<&Node<T>>) -> isize {
            match node {
                None => -1,
                Some(n) => 1 + height(n.left()).max(height(n.right())),
            }
        }
        height(self.root())
    }

    /// Every slot at depth `level`, left to right, absent slots included.
    ///
    /// The result always has exactly `2^level` entries. An absent node still
    /// accounts for all of the slots beneath it.
    ///
    /// # Panics
    ///
    /// If `level` exceeds [`MAX_LEVEL`]; use [`Self::try_nodes_at_level`]
    /// for levels that come from input.
    pub fn nodes_at_level(&self, level: usize) -> Vec<Option<&Node<T>>> {
        match self.try_nodes_at_level(level) {
            Some(slots) => slots,
            None => panic!("level {level} is deeper than MAX_LEVEL ({MAX_LEVEL})"),
        }
    }

    /// Like [`Self::nodes_at_level`], `None` beyond [`MAX_LEVEL`].
    #[instrument(level = "trace", skip(self))]
    pub fn try_nodes_at_level(&self, level: usize) -> Option<Vec<Option<&Node<T>>>> {
        if level > MAX_LEVEL {
            return None;
        }
        let width = 1usize.checked_shl(level as u32)?;

        fn collect<'a, T>(
            slots: &mut Vec<Option<&'a Node<T>>>,
            node: Option<&'a Node<T>>,
            current: usize,
            level: usize,
        ) {
            if current == level {
                slots.push(node);
                return;
            }
            match node {
                Some(n) => {
                    collect(slots, n.left(), current + 1, level);
                    collect(slots, n.right(), current + 1, level);
                }
                None => slots.extend(iter::repeat(None).take(1 << (level - current))),
            }
        }

        let mut slots = Vec::with_capacity(width);
        collect(&mut slots, self.root(), 0, level);
        Some(slots)
    }

    /// Left subtree, node, right subtree.
    pub fn inorder(&self) -> Vec<&Node<T>> {
        fn walk<'a, T>(out: &mut Vec<&'a Node<T>>, node: Option<&'a Node<T>>) {
            if let Some(n) = node {
                walk(out, n.left());
                out.push(n);
                walk(out, n.right());
            }
        }
        let mut out = Vec::new();
        walk(&mut out, self.root());
        out
    }

    /// Node, left subtree, right subtree.
    pub fn preorder(&self) -> Vec<&Node<T>> {
        fn walk<'a, T>(out: &mut Vec<&'a Node<T>>, node: Option<&'a Node<T>>) {
            if let Some(n) = node {
                out.push(n);
                walk(out, n.left());
                walk(out, n.right());
            }
        }
        let mut out = Vec::new();
        walk(&mut out, self.root());
        out
    }

    /// Left subtree, right subtree, node.
    pub fn postorder(&self) -> Vec<&Node<T>> {
        fn walk<'a, T>(out: &mut Vec<&'a Node<T>>, node: Option<&'a Node<T>>) {
            if let Some(n) = node {
                walk(out, n.left());
                walk(out, n.right());
                out.push(n);
            }
        }
        let mut out = Vec::new();
        walk(&mut out, self.root());
        out
    }
}

impl<T: fmt::Display> BinaryTree<T> {
    /// One bracketed, comma-separated line per level, absent slots printed
    /// as [`ABSENT_SLOT`]. An empty tree renders its single root slot.
    ///
    /// Levels deeper than [`MAX_LEVEL`] are summarized in one last line.
    pub fn render(&self) -> String {
        let deepest = self.height().max(0) as usize;
        let mut lines: Vec<String> = (0..=deepest.min(MAX_LEVEL))
            .map(|level| {
                let slots = self
                    .nodes_at_level(level)
                    .into_iter()
                    .map(|slot| match slot {
                        Some(node) => node.value().to_string(),
                        None => ABSENT_SLOT.to_string(),
                    })
                    .join(",");
                format!("[{slots}]")
            })
            .collect();
        if deepest > MAX_LEVEL {
            lines.push(format!("[{} deeper levels omitted]", deepest - MAX_LEVEL));
        }
        lines.join("\n")
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
