//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::token::Operator;

/// Structural defects found while assembling a tree from postfix tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformation {
    #[error("operator '{operator}' is missing an operand")]
    MissingOperand { operator: Operator },

    #[error("{count} operands left without an operator")]
    LeftoverOperands { count: usize },
}

/// Construction failures for an expression tree.
///
/// A failed construction never yields a partial tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("malformed expression: {0}")]
    MalformedExpression(#[from] Malformation),

    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("empty expression")]
    EmptyExpression,

    #[error("expression has {length} characters, at most {limit} are accepted")]
    TooLong { length: usize, limit: usize },
}

/// Result type for expression construction.
pub type ExpressionResult<T> = Result<T, ExpressionError>;
