use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum parenthesis nesting accepted by the parser.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}

/// Parses a complete token sequence into a single expression.
///
/// The sequence must end with [`Token::End`] directly after the expression.
///
/// Grammar: `program := expression End`
///
/// # Errors
/// - `UnexpectedTrailingTokens` if anything other than `End` follows the
///   expression, e.g. the `)` in `1 + 1)`.
/// - Propagates any error from [`parse_expression`].
///
/// # Example
/// ```
/// use calcd::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("2 * (3 + 4)").unwrap();
/// assert!(parse_program(&tokens).is_ok());
///
/// let tokens = tokenize("2 * (3 + 4))").unwrap();
/// assert!(parse_program(&tokens).is_err());
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        Some((Token::End, _)) => Ok(expr),
        Some((token, offset)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                       offset: *offset, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { offset: tokens.last()
                                                                     .map_or(0, |(_, o)| *o) }),
    }
}
