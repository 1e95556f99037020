use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Whitespace never produces a token. [`Token::End`] is never matched from
/// source text; the [`Tokenizer`] appends it once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `2.` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Sentinel marking the end of the input.
    End,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Rust's float parser accepts every shape the number regexes match,
/// including a leading or trailing decimal point.
///
/// # Returns
/// - `Some(f64)`: The parsed value, which may be infinite for very long
///   digit strings. The [`Tokenizer`] rejects those.
/// - `None`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// A lazy, fail-fast stream of `(Token, offset)` pairs.
///
/// The offset is the byte index at which the token starts. After the last
/// lexeme the stream yields `(Token::End, source.len())` once and then
/// stops. The first unrecognized character is reported as
/// [`ParseError::InvalidCharacter`] and ends the stream.
///
/// # Example
/// ```
/// use calcd::interpreter::lexer::{Token, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("1 +2").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 0), (Token::Plus, 2), (Token::Number(2.0), 3), (Token::End, 4)]);
/// ```
pub struct Tokenizer<'src> {
    lexer:    logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Token::lexer(source),
               finished: false, }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<(Token, usize), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(result) = self.lexer.next() else {
            self.finished = true;
            return Some(Ok((Token::End, self.lexer.source().len())));
        };

        let offset = self.lexer.span().start;
        match result {
            Ok(Token::Number(value)) if !value.is_finite() => {
                self.finished = true;
                Some(Err(ParseError::LiteralTooLarge { offset }))
            },
            Ok(token) => Some(Ok((token, offset))),
            Err(()) => {
                self.finished = true;
                let character = self.lexer.slice().chars().next().unwrap_or_default();
                Some(Err(ParseError::InvalidCharacter { character, offset }))
            },
        }
    }
}

/// Tokenizes a whole expression, stopping at the first error.
///
/// The returned sequence always ends with [`Token::End`].
///
/// # Errors
/// Returns the first [`ParseError`] produced by the [`Tokenizer`].
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    Tokenizer::new(source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn operators_and_parens() {
        assert_eq!(kinds("(+-*/)"),
                   vec![Token::LParen,
                        Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::RParen,
                        Token::End]);
    }

    #[test]
    fn number_shapes() {
        assert_eq!(kinds("12 3.5 7. .25"),
                   vec![Token::Number(12.0),
                        Token::Number(3.5),
                        Token::Number(7.0),
                        Token::Number(0.25),
                        Token::End]);
    }

    #[test]
    fn whitespace_only_yields_end() {
        assert_eq!(kinds(" \t\n "), vec![Token::End]);
        assert_eq!(tokenize("   ").unwrap(), vec![(Token::End, 3)]);
    }

    #[test]
    fn invalid_character_reports_offset() {
        let err = tokenize("1 + a").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCharacter { character: 'a', offset: 4 }));
    }

    #[test]
    fn leading_decimal_point() {
        assert_eq!(tokenize(".5+1").unwrap(),
                   vec![(Token::Number(0.5), 0),
                        (Token::Plus, 2),
                        (Token::Number(1.0), 3),
                        (Token::End, 4)]);
    }

    #[test]
    fn lone_decimal_point_is_invalid() {
        let err = tokenize("1 + .").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCharacter { character: '.', offset: 4 }));
    }

    #[test]
    fn second_decimal_point_starts_a_new_literal() {
        assert_eq!(kinds("1.2.3"), vec![Token::Number(1.2), Token::Number(0.3), Token::End]);
    }

    #[test]
    fn non_ascii_character_is_reported_whole() {
        let err = tokenize("2 × 3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidCharacter { character: '×', offset: 2 }));
    }

    #[test]
    fn huge_literal_is_rejected() {
        let source = "9".repeat(400);
        assert!(matches!(tokenize(&source), Err(ParseError::LiteralTooLarge { offset: 0 })));
    }

    #[test]
    fn stream_stops_after_error() {
        let mut tokens = Tokenizer::new("1 $ 2");
        assert!(matches!(tokens.next(), Some(Ok((Token::Number(_), 0)))));
        assert!(matches!(tokens.next(), Some(Err(_))));
        assert!(tokens.next().is_none());
    }

    #[test]
    fn stream_ends_after_sentinel() {
        let mut tokens = Tokenizer::new("");
        assert!(matches!(tokens.next(), Some(Ok((Token::End, 0)))));
        assert!(tokens.next().is_none());
    }
}
