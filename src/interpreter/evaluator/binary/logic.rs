use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Value, from_bool, is_truthy},
    },
};

/// Evaluates a logical operation between two already evaluated values.
///
/// Both operands are converted with the truthiness rule and combined. There
/// is no short-circuiting: by the time this runs, both sides have been
/// evaluated, including their side effects.
///
/// # Parameters
/// - `op`: `And` or `Or`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use arith::{ast::BinaryOperator, interpreter::evaluator::binary::logic::eval_logic};
///
/// assert_eq!(eval_logic(BinaryOperator::And, 2, -1, 1).unwrap(), 1);
/// assert_eq!(eval_logic(BinaryOperator::Or, 0, 0, 1).unwrap(), 0);
/// ```
pub fn eval_logic(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    match op {
        BinaryOperator::And => Ok(from_bool(is_truthy(left) && is_truthy(right))),
        BinaryOperator::Or => Ok(from_bool(is_truthy(left) || is_truthy(right))),
        _ => Err(RuntimeError::MalformedNode { details: format!("'{op}' is not a logical operator"),
                                               line }),
    }
}
