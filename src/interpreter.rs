/// The evaluator module folds a parsed expression into a number.
///
/// The evaluator walks the AST left to right and performs the arithmetic. It
/// is the only phase that can fail with a [`RuntimeError`].
///
/// # Responsibilities
/// - Applies `+ - * /` with left-associativity.
/// - Reports division by zero and overflow instead of producing infinities.
///
/// [`RuntimeError`]: crate::error::RuntimeError
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// The lexer (tokenizer) reads the raw text and produces a lazy stream of
/// tokens, each corresponding to a number, an operator or a parenthesis.
/// This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input into tokens paired with their byte offsets.
/// - Skips whitespace.
/// - Rejects the first unrecognized character immediately.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer with
/// recursive descent and constructs an AST that encodes operator precedence.
///
/// # Responsibilities
/// - Converts tokens into [`Expr`] nodes.
/// - Validates the grammar, reporting errors with their offsets.
/// - Bounds parenthesis nesting.
///
/// [`Expr`]: crate::ast::Expr
pub mod parser;
