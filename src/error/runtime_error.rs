#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a well-formed
/// expression.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Byte offset of the `/` operator.
        offset: usize,
    },
    /// A result could not be represented as a finite number.
    Overflow {
        /// Byte offset of the operator that overflowed.
        offset: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset of the operator that failed.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset } | Self::Overflow { offset } => *offset,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
            Self::Overflow { offset } => write!(f,
                                                "Error at offset {offset}: Result is too large to represent."),
        }
    }
}

impl std::error::Error for RuntimeError {}
