use std::io::Write;

use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::assignment_target,
        },
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// `Not` and `Negate` evaluate the operand and apply [`eval_unary`].
    /// `PreIncrement` and `PreDecrement` need a variable operand: they read
    /// it, write back the value plus or minus one, and return the new value.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `expr`: Operand expression.
    /// - `line`: Line number.
    ///
    /// # Example
    /// ```
    /// use arith::{
    ///     ast::{Expr, UnaryOperator},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.env.assign("x", 5);
    ///
    /// let x = Expr::Variable { name: "x".into(),
    ///                          line: 1, };
    /// let r = context.eval_unary_op(UnaryOperator::PreIncrement, &x, 1)
    ///                .unwrap();
    ///
    /// assert_eq!(r, 6);
    /// assert_eq!(context.env.get("x"), Some(6));
    /// ```
    pub fn eval_unary_op(&mut self,
                         op: UnaryOperator,
                         expr: &Expr,
                         line: usize)
                         -> EvalResult<Value> {
        let delta = match op {
            UnaryOperator::PreIncrement => 1,
            UnaryOperator::PreDecrement => -1,
            UnaryOperator::Not | UnaryOperator::Negate => {
                let value = self.eval(expr)?;
                return eval_unary(op, value, line);
            },
        };

        let name = assignment_target(expr, op, line)?;
        let updated = self.env.lookup(name, line)?.wrapping_add(delta);
        self.env.assign(name, updated);
        Ok(updated)
    }
}

/// Evaluates a non-assigning unary operation on a value.
///
/// Supported operators:
/// - `Not`: flips every bit of the 32-bit value, so `~0` is `-1`.
/// - `Negate`: arithmetic negation, wrapping for `i32::MIN`.
///
/// # Errors
/// The increment and decrement operators need a variable and are rejected
/// with [`RuntimeError::MalformedNode`].
///
/// # Example
/// ```
/// use arith::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Not, 0, 1).unwrap(), -1);
/// assert_eq!(eval_unary(UnaryOperator::Not, 5, 1).unwrap(), -6);
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5, 1).unwrap(), -5);
/// ```
pub fn eval_unary(op: UnaryOperator, value: Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Not => Ok(!value),
        UnaryOperator::Negate => Ok(value.wrapping_neg()),
        UnaryOperator::PreIncrement | UnaryOperator::PreDecrement => {
            Err(RuntimeError::MalformedNode { details: format!("'{op}' cannot be applied to a plain value"),
                                              line })
        },
    }
}
