//! Infix arithmetic expression trees.
//!
//! Text such as `2+3*4` is converted to postfix with a shunting-yard pass,
//! assembled into a [`BinaryTree`](domain::BinaryTree) and then queried:
//! evaluation, the three depth-first notations, and two text renderings.
//!
//! ```
//! use exprtree::domain::ExpressionTree;
//!
//! let tree = ExpressionTree::new("2+3*4").unwrap();
//! assert_eq!(tree.evaluate(), 14.0);
//! assert_eq!(tree.prefix(), "+2*34");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod util;

pub use domain::{BinaryTree, ExpressionError, ExpressionTree, Node, Operator, Token};
