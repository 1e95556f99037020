use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a scalar arithmetic operation.
///
/// Division by zero is checked before dividing, and a result that is not
/// finite is reported as an overflow rather than returned.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Byte offset of the operator, for error reporting.
///
/// # Example
/// ```
/// use calcd::{ast::BinaryOperator, interpreter::evaluator::binary::eval_binary_op};
///
/// assert_eq!(eval_binary_op(BinaryOperator::Mul, 1.5, 2.0, 0).unwrap(), 3.0);
/// assert!(eval_binary_op(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
/// ```
pub fn eval_binary_op(op: BinaryOperator, left: f64, right: f64, offset: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let value = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero { offset });
            }
            left / right
        },
    };

    if !value.is_finite() {
        return Err(RuntimeError::Overflow { offset });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_divisor_is_zero() {
        assert_eq!(eval_binary_op(BinaryOperator::Div, 1.0, -0.0, 7),
                   Err(RuntimeError::DivisionByZero { offset: 7 }));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(eval_binary_op(BinaryOperator::Mul, f64::MAX, 2.0, 3),
                   Err(RuntimeError::Overflow { offset: 3 }));
        assert_eq!(eval_binary_op(BinaryOperator::Div, f64::MAX, 0.5, 1),
                   Err(RuntimeError::Overflow { offset: 1 }));
    }

    #[test]
    fn tiny_divisor_is_not_zero() {
        assert_eq!(eval_binary_op(BinaryOperator::Div, 1.0, 0.5, 0).unwrap(), 2.0);
        assert!(eval_binary_op(BinaryOperator::Div, 1.0, 1e-300, 0).is_ok());
    }
}
