/// Core evaluation logic.
///
/// Contains the result type and the tree walk that folds an [`Expr`] into a
/// number.
///
/// [`Expr`]: crate::ast::Expr
pub mod core;

/// Binary operator evaluation.
///
/// Applies a single arithmetic operator to two numbers, reporting division
/// by zero and overflow.
pub mod binary;
