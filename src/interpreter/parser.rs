/// Core parsing logic.
///
/// Contains the parse result type, the entry point for whole expressions and
/// the check that nothing follows a complete expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `+ -` and `* /`.
pub mod binary;

/// Primary expression parsing.
///
/// Handles numeric literals and parenthesized sub-expressions.
pub mod primary;
