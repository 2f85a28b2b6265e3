use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an arithmetic or bitwise operation.
///
/// Arithmetic wraps on overflow. Division truncates toward zero and checks
/// for a zero divisor explicitly; `i32::MIN / -1` wraps to `i32::MIN`. The
/// operator must be one of `Add`, `Sub`, `Mul`, `Div`, `BitXor`, `BitAnd` or
/// `BitOr`.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use arith::{ast::BinaryOperator, interpreter::evaluator::binary::scalar::eval_scalar_op};
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, -7, 2, 1).unwrap(), -3);
/// assert_eq!(eval_scalar_op(BinaryOperator::BitXor, 6, 3, 1).unwrap(), 5);
/// assert_eq!(eval_scalar_op(BinaryOperator::Add, i32::MAX, 1, 1).unwrap(),
///            i32::MIN);
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Add, BitAnd, BitOr, BitXor, Div, Mul, Sub};

    match op {
        Add => Ok(left.wrapping_add(right)),
        Sub => Ok(left.wrapping_sub(right)),
        Mul => Ok(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero { line })
            } else {
                Ok(left.wrapping_div(right))
            }
        },
        BitXor => Ok(left ^ right),
        BitAnd => Ok(left & right),
        BitOr => Ok(left | right),
        _ => Err(RuntimeError::MalformedNode { details: format!("'{op}' is not an arithmetic operator"),
                                               line }),
    }
}
