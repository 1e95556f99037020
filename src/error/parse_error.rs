#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during tokenizing or parsing.
///
/// Every variant is a property of the input text alone and is detected
/// before any arithmetic is performed.
pub enum ParseError {
    /// Found a character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the expression.
        offset:    usize,
    },
    /// Found a token where an operand was expected.
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset of the token in the expression.
        offset: usize,
    },
    /// Reached the end of input while an operand was still expected.
    UnexpectedEndOfInput {
        /// Byte offset of the end of the expression.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the unmatched `(`.
        offset: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset of the extra token.
        offset: usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit:  usize,
        /// Byte offset of the `(` that exceeded the limit.
        offset: usize,
    },
    /// A literal value was too large to be represented.
    LiteralTooLarge {
        /// Byte offset of the literal.
        offset: usize,
    },
}

impl ParseError {
    /// Returns the byte offset at which the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::InvalidCharacter { offset, .. }
            | Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::ExpectedClosingParen { offset }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::NestingTooDeep { offset, .. }
            | Self::LiteralTooLarge { offset } => *offset,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, offset } => {
                write!(f, "Error at offset {offset}: Invalid character '{character}'.")
            },

            Self::UnexpectedToken { token, offset } => write!(f,
                                                              "Error at offset {offset}: Expected a number or '(', found '{token}'."),

            Self::UnexpectedEndOfInput { offset } => write!(f,
                                                            "Error at offset {offset}: Unexpected end of input, an operand is missing."),

            Self::ExpectedClosingParen { offset } => write!(f,
                                                            "Error at offset {offset}: Parenthesis is never closed."),

            Self::UnexpectedTrailingTokens { token, offset } => write!(f,
                                                                       "Error at offset {offset}: Extra tokens after expression, starting with '{token}'."),

            Self::NestingTooDeep { limit, offset } => write!(f,
                                                             "Error at offset {offset}: Parentheses nested deeper than {limit} levels."),

            Self::LiteralTooLarge { offset } => {
                write!(f, "Error at offset {offset}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
