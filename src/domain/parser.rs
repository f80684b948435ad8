//! Infix to postfix conversion (shunting-yard).

use tracing::{debug, instrument, trace};

use crate::domain::error::{ExpressionError, ExpressionResult};
use crate::domain::token::{Operator, Token};

/// Longest accepted input, in characters.
///
/// Tree queries recurse once per level and a chain of `n` operators is `n`
/// levels deep, so this bounds the stack depth of everything downstream.
pub const MAX_EXPRESSION_LEN: usize = 4096;

/// Converts infix text to postfix tokens.
///
/// Whitespace is skipped. Operators of equal precedence are popped before the
/// incoming one is pushed, so every operator, `^` included, groups to the
/// left: `2^3^2` becomes `23^2^`.
///
/// Only the token alphabet is checked here; structural problems such as a
/// missing operand surface when the tree is assembled.
///
/// # Errors
///
/// * [`ExpressionError::TooLong`] beyond [`MAX_EXPRESSION_LEN`] characters
/// * [`ExpressionError::InvalidCharacter`] for anything that is neither
///   whitespace, a digit `0`-`9`, nor one of `+ - * / ^`
#[instrument(level = "debug", skip(infix), fields(length = infix.len()))]
pub fn infix_to_postfix(infix: &str) -> ExpressionResult<Vec<Token>> {
    let length = infix.chars().count();
    if length > MAX_EXPRESSION_LEN {
        return Err(ExpressionError::TooLong {
            length,
            limit: MAX_EXPRESSION_LEN,
        });
    }

    let mut postfix = Vec::with_capacity(infix.len());
    let mut operators: Vec<Operator> = Vec::new();

    for (position, character) in infix.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        match Token::from_char(character) {
            Some(digit @ Token::Digit(_)) => postfix.push(digit),
            Some(Token::Operator(incoming)) => {
                while let Some(&top) = operators.last() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    operators.pop();
                    postfix.push(Token::Operator(top));
                }
                operators.push(incoming);
            }
            None => {
                return Err(ExpressionError::InvalidCharacter {
                    character,
                    position,
                })
            }
        }
        trace!(?operators, "after {:?}", character);
    }

    postfix.extend(operators.into_iter().rev().map(Token::Operator));
    debug!("postfix: {}", render_tokens(&postfix));
    Ok(postfix)
}

/// Concatenates token symbols without separators.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.symbol()).collect()
}
