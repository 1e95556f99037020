//! # calcd
//!
//! calcd evaluates arithmetic expressions built from numbers, `+ - * /` and
//! parentheses, and serves the evaluator over a small JSON HTTP endpoint.
//! Evaluation is stateless: one call, one expression, one result or one
//! typed error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::trace;

use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The AST is built by the parser and folded by the
/// evaluator.
///
/// # Responsibilities
/// - Keeps operators of equal precedence in flat chains.
/// - Attaches source offsets to nodes for error reporting.
pub mod ast;
/// Settings for the HTTP front end.
///
/// Holds the listen address, route, body size limit and the policy that maps
/// syntax errors to status codes.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines every error that can be raised while tokenizing,
/// parsing or evaluating an expression. Syntax errors and runtime errors are
/// separate types, joined by [`EvaluationError`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets to every error.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Orchestrates tokenizing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The JSON-over-HTTP front end.
///
/// Decodes `{"expression": ...}` requests, calls [`evaluate`] and encodes
/// the outcome as a status code and JSON body.
pub mod transport;

/// Evaluates an arithmetic expression.
///
/// The expression is tokenized, parsed in full and only then computed, so
/// a syntax error anywhere in the input is reported even when the
/// arithmetic before it would fail.
///
/// # Errors
/// - [`EvaluationError::Syntax`] if the input is not a valid expression.
/// - [`EvaluationError::Runtime`] on division by zero or overflow.
///
/// # Examples
/// ```
/// use calcd::evaluate;
///
/// assert_eq!(evaluate("1 + 2 * 3 - 4 / 2").unwrap(), 5.0);
/// assert_eq!(evaluate("(1 + 1) * 2").unwrap(), 4.0);
///
/// assert!(evaluate("1 + a").unwrap_err().is_syntax());
/// assert!(evaluate("1 / 0").unwrap_err().is_runtime());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(expression)?;
    let expr = parse_program(&tokens)?;
    let value = eval(&expr)?;
    trace!("{expression:?} = {value}");
    Ok(value)
}
