//! Expression trees built from infix text.

use std::fmt;
use std::iter;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::binary_tree::{BinaryTree, Node, MAX_LEVEL};
use crate::domain::error::{ExpressionError, ExpressionResult, Malformation};
use crate::domain::parser::{infix_to_postfix, render_tokens};
use crate::domain::token::Token;
use crate::domain::tree_convert::TreeConvert;

/// Tallest tree drawn as a diagram; taller trees are drawn as a `termtree`
/// hierarchy. The bottom row of a diagram is `2^(h+1) - 1` characters wide.
pub const MAX_DIAGRAM_HEIGHT: usize = MAX_LEVEL;

/// Glyphs used by [`ExpressionTree::render_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramStyle {
    /// Fills the gap between a left child and its right sibling.
    pub connector: char,
    /// Stands in for an absent slot.
    pub absent: char,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            connector: '`',
            absent: ':',
        }
    }
}

/// An arithmetic expression held as an immutable binary tree.
///
/// Leaves are digits; every inner node is a binary operator with both
/// operands present.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionTree {
    tree: BinaryTree<Token>,
}

impl ExpressionTree {
    /// Parses `infix` and assembles the tree.
    ///
    /// # Errors
    ///
    /// * [`ExpressionError::InvalidCharacter`] for characters outside the language
    /// * [`ExpressionError::EmptyExpression`] when there is nothing but whitespace
    /// * [`ExpressionError::MalformedExpression`] for missing operands or operators
    #[instrument(level = "debug")]
    pub fn new(infix: &str) -> ExpressionResult<Self> {
        let postfix = infix_to_postfix(infix)?;
        Self::from_postfix(&postfix)
    }

    /// Assembles the tree from tokens already in postfix order.
    #[instrument(level = "debug", skip(postfix), fields(tokens = %render_tokens(postfix)))]
    pub fn from_postfix(postfix: &[Token]) -> ExpressionResult<Self> {
        let mut stack: Vec<Node<Token>> = Vec::new();

        for &token in postfix {
            match token {
                Token::Digit(_) => stack.push(Node::leaf(token)),
                Token::Operator(operator) => {
                    let missing = || ExpressionError::from(Malformation::MissingOperand { operator });
                    let right = stack.pop().ok_or_else(missing)?;
                    let left = stack.pop().ok_or_else(missing)?;
                    stack.push(Node::branch(token, left, right));
                }
            }
        }

        let root = stack.pop().ok_or(ExpressionError::EmptyExpression)?;
        if !stack.is_empty() {
            return Err(Malformation::LeftoverOperands {
                count: stack.len() + 1,
            }
            .into());
        }

        let tree = BinaryTree::from(root);
        debug!(height = tree.height(), nodes = tree.len(), "expression tree built");
        Ok(Self { tree })
    }

    /// The underlying tree, for structural queries.
    pub fn binary_tree(&self) -> &BinaryTree<Token> {
        &self.tree
    }

    pub fn height(&self) -> isize {
        self.tree.height()
    }

    /// Computes the value bottom-up in `f64`.
    ///
    /// Division by zero is not an error: the result is an infinity or NaN.
    pub fn evaluate(&self) -> f64 {
        fn evaluate(node: &Node<Token>) -> f64 {
            match (*node.value(), node.left(), node.right()) {
                (Token::Digit(d), _, _) => f64::from(d),
                (Token::Operator(op), Some(left), Some(right)) => {
                    op.apply(evaluate(left), evaluate(right))
                }
                (Token::Operator(op), _, _) => {
                    unreachable!("operator '{op}' built without both operands")
                }
            }
        }
        self.tree.root().map_or(f64::NAN, evaluate)
    }

    pub fn infix(&self) -> String {
        notation(self.tree.inorder())
    }

    pub fn prefix(&self) -> String {
        notation(self.tree.preorder())
    }

    pub fn postfix(&self) -> String {
        notation(self.tree.postorder())
    }

    /// Diagram with the default glyphs.
    pub fn render(&self) -> String {
        self.render_with(&DiagramStyle::default())
    }

    /// Fixed-width diagram laid out as if the tree were complete.
    ///
    /// At level `l` of a tree of height `h`, a row starts with
    /// `2^(h-l) - 1` spaces and neighbouring entries are `2^(h-l+1) - 1`
    /// characters apart. The gap after an even position is filled with the
    /// connector, the gap after an odd position with spaces.
    ///
    /// Trees taller than [`MAX_DIAGRAM_HEIGHT`] fall back to the
    /// [`TreeConvert`] hierarchy, one node per line.
    pub fn render_with(&self, style: &DiagramStyle) -> String {
        let height = self.tree.height();
        if height < 0 {
            return String::new();
        }
        let height = height as usize;
        if height > MAX_DIAGRAM_HEIGHT {
            debug!(height, "too tall for a diagram, drawing hierarchy");
            return self.to_tree_string().to_string().trim_end().to_string();
        }

        let mut rows = Vec::with_capacity(height + 1);
        for level in 0..=height {
            let span = 1usize << (height - level);
            let padding = span - 1;
            let separation = 2 * span - 1;

            let slots = self.tree.nodes_at_level(level);
            let last = slots.len() - 1;
            let mut row = String::new();
            row.extend(iter::repeat(' ').take(padding));
            for (position, slot) in slots.into_iter().enumerate() {
                row.push(slot.map_or(style.absent, |node| node.value().symbol()));
                if position < last {
                    let fill = if position % 2 == 0 { style.connector } else { ' ' };
                    row.extend(iter::repeat(fill).take(separation));
                }
            }
            rows.push(row);
        }
        rows.join("\n")
    }
}

fn notation(nodes: Vec<&Node<Token>>) -> String {
    nodes.into_iter().map(|node| node.value().symbol()).collect()
}

impl FromStr for ExpressionTree {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ExpressionTree {
    type Error = ExpressionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
