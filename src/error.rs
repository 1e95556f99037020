/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of an
/// expression: invalid characters, missing operands, unbalanced parentheses
/// and trailing tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a syntactically valid
/// expression, such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error returned by [`crate::evaluate`].
///
/// The two kinds stay distinguishable so callers can react differently to
/// malformed input and to arithmetic failures.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// The expression does not conform to the grammar.
    Syntax(ParseError),
    /// The expression is well formed but could not be computed.
    Runtime(RuntimeError),
}

impl EvaluationError {
    /// Returns `true` for errors caused by malformed input.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// Returns `true` for errors raised during arithmetic.
    #[must_use]
    pub const fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }

    /// Returns the byte offset in the expression where the error occurred.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Syntax(e) => e.offset(),
            Self::Runtime(e) => e.offset(),
        }
    }
}

impl From<ParseError> for EvaluationError {
    fn from(value: ParseError) -> Self {
        Self::Syntax(value)
    }
}

impl From<RuntimeError> for EvaluationError {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
