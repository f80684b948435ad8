//! Domain layer: expression tokens, trees and their algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod binary_tree;
pub mod error;
pub mod expression_tree;
pub mod parser;
pub mod token;
pub mod tree_convert;

pub use binary_tree::{BinaryTree, Node, ABSENT_SLOT, MAX_LEVEL};
pub use error::{ExpressionError, ExpressionResult, Malformation};
pub use expression_tree::{DiagramStyle, ExpressionTree, MAX_DIAGRAM_HEIGHT};
pub use parser::{infix_to_postfix, render_tokens, MAX_EXPRESSION_LEN};
pub use token::{Operator, Token};
pub use tree_convert::TreeConvert;
