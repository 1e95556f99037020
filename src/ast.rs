/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// One step of a left-associative operator chain: `<op> <operand>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// The operator applied to the running value and `operand`.
    pub op:      BinaryOperator,
    /// The right-hand side.
    pub operand: Expr,
    /// Byte offset of the operator in the source.
    pub offset:  usize,
}

/// An abstract syntax tree node for an arithmetic expression.
///
/// Operators of equal precedence are stored flat in a [`Expr::Chain`]
/// instead of as nested binary nodes, so `1 + 2 + 3 + ...` does not grow
/// the tree's depth. Only parentheses nest.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value:  f64,
        /// Byte offset in the source.
        offset: usize,
    },
    /// `head op1 operand1 op2 operand2 ...`, folded left to right.
    Chain {
        /// The leftmost operand.
        head: Box<Self>,
        /// The operators and operands that follow, in source order.
        tail: Vec<Operation>,
    },
}

impl Expr {
    /// Builds a chain, collapsing to `head` when there is nothing to apply.
    #[must_use]
    pub fn chain(head: Self, tail: Vec<Operation>) -> Self {
        if tail.is_empty() {
            head
        } else {
            Self::Chain { head: Box::new(head),
                          tail }
        }
    }

    /// Returns the byte offset where this expression starts.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. } => *offset,
            Self::Chain { head, .. } => head.offset(),
        }
    }
}
