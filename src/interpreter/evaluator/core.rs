use crate::{
    ast::{Expr, Operation},
    error::RuntimeError,
    interpreter::evaluator::binary::eval_binary_op,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression and returns the resulting value.
///
/// Chains are folded left to right, so operators of equal precedence are
/// left-associative. Evaluation stops at the first failing operator.
///
/// # Example
/// ```
/// use calcd::interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse_program};
///
/// let expr = parse_program(&tokenize("8 / 4 / 2").unwrap()).unwrap();
/// assert_eq!(eval(&expr).unwrap(), 1.0);
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::Chain { head, tail } => {
            tail.iter()
                .try_fold(eval(head)?, |acc, Operation { op, operand, offset }| {
                    eval_binary_op(*op, acc, eval(operand)?, *offset)
                })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::core::parse_program};

    fn run(source: &str) -> EvalResult<f64> {
        eval(&parse_program(&tokenize(source).unwrap()).unwrap())
    }

    #[test]
    fn left_associativity() {
        assert_eq!(run("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(run("64 / 4 / 2").unwrap(), 8.0);
        assert_eq!(run("2 * 3 / 4").unwrap(), 1.5);
    }

    #[test]
    fn precedence_and_grouping() {
        assert_eq!(run("1 + 2 * 3 - 4 / 2").unwrap(), 5.0);
        assert_eq!(run("(1 + 2) * (3 - 4) / 2").unwrap(), -1.5);
        assert_eq!(run("2 * (3 + (4 - 1) * 2)").unwrap(), 18.0);
    }

    #[test]
    fn division_by_zero_reports_operator() {
        assert_eq!(run("1 + 4 / (2 - 2)"), Err(RuntimeError::DivisionByZero { offset: 6 }));
        assert_eq!(run("0 / 0"), Err(RuntimeError::DivisionByZero { offset: 2 }));
    }

    #[test]
    fn first_runtime_error_wins() {
        assert_eq!(run("1 / 0 + 2 / 0"), Err(RuntimeError::DivisionByZero { offset: 2 }));
    }

    #[test]
    fn long_flat_chain_does_not_recurse() {
        let source = vec!["1"; 100_000].join("+");
        assert_eq!(run(&source).unwrap(), 100_000.0);
    }
}
