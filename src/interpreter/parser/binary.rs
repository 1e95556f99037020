use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Operation},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// An `Expr::Chain` of multiplicative operands, or the single operand when
/// no operator follows it.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let head = parse_multiplicative(tokens, depth)?;
    let mut tail = Vec::new();
    loop {
        if let Some(&&(token, offset)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let operand = parse_multiplicative(tokens, depth)?;
            tail.push(Operation { op,
                                  operand,
                                  offset });
            continue;
        }
        break;
    }
    Ok(Expr::chain(head, tail))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// An `Expr::Chain` of primary operands, or the single operand when no
/// operator follows it.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let head = parse_primary(tokens, depth)?;
    let mut tail = Vec::new();
    loop {
        if let Some(&&(token, offset)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let operand = parse_primary(tokens, depth)?;
            tail.push(Operation { op,
                                  operand,
                                  offset });
            continue;
        }
        break;
    }
    Ok(Expr::chain(head, tail))
}

/// Maps a token to its corresponding binary operator.
///
/// # Returns
/// `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, otherwise `None`.
///
/// # Example
/// ```
/// use calcd::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
