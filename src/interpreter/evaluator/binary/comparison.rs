use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Value, from_bool},
    },
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// The result is `1` when the comparison holds and `0` otherwise.
///
/// # Parameters
/// - `op`: The comparison operator.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Current line number used for error reporting.
///
/// # Example
/// ```
/// use arith::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::eval_comparison};
///
/// assert_eq!(eval_comparison(BinaryOperator::LessEqual, 3, 3, 1).unwrap(), 1);
/// assert_eq!(eval_comparison(BinaryOperator::NotEqual, 3, 3, 1).unwrap(), 0);
/// ```
pub fn eval_comparison(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    let holds = match op {
        Equal => left == right,
        NotEqual => left != right,
        Less => left < right,
        LessEqual => left <= right,
        Greater => left > right,
        GreaterEqual => left >= right,
        _ => {
            return Err(RuntimeError::MalformedNode { details: format!("'{op}' is not a comparison operator"),
                                                     line });
        },
    };

    Ok(from_bool(holds))
}
