use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar: a numeric literal or a
/// parenthesized expression. There is no unary minus, so `-1` fails here.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned where an operand is expected.
/// - `depth`: Number of enclosing parentheses.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends where an operand is expected.
/// - `UnexpectedToken` if an operator or `)` stands where an operand is
///   expected.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some(&(Token::Number(value), offset)) => Ok(Expr::Literal { value, offset }),
        Some(&(Token::LParen, offset)) => parse_grouping(tokens, offset, depth),
        Some(&(Token::End, offset)) => Err(ParseError::UnexpectedEndOfInput { offset }),
        Some(&(token, offset)) => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                                    offset }),
        None => Err(ParseError::UnexpectedEndOfInput { offset: 0 }),
    }
}

/// Parses the inside of a parenthesized expression.
///
/// The opening `(` has already been consumed; `open` is its offset and is
/// what an unmatched-parenthesis error reports.
///
/// # Errors
/// - `NestingTooDeep` once `depth` reaches [`MAX_NESTING_DEPTH`].
/// - `ExpectedClosingParen` if the inner expression is not followed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                offset: open, });
    }

    let inner = parse_expression(tokens, depth + 1)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(ParseError::ExpectedClosingParen { offset: open }),
    }
}
