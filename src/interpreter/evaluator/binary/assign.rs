use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::core::eval_binary,
            core::{Context, EvalResult},
            utils::assignment_target,
        },
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Stores an already evaluated right-hand side into the variable on the
    /// left of `=`, and returns it.
    ///
    /// The target is updated in whichever scope already binds it, or declared
    /// in the innermost scope.
    ///
    /// # Errors
    /// Returns `ExpectedVariable` when `target` is not a variable.
    pub fn eval_assignment(&mut self, target: &Expr, value: Value, line: usize) -> EvalResult<Value> {
        let name = assignment_target(target, BinaryOperator::Assign, line)?;
        self.env.assign(name, value);
        Ok(value)
    }

    /// Combines the current value of `target` with `rval` using `base`, writes
    /// the result back and returns it.
    ///
    /// Both operands have already been evaluated, right first. The result is
    /// computed before the target is checked, so `3 /= 0` reports the division
    /// by zero rather than the missing variable.
    ///
    /// # Parameters
    /// - `target`: The left operand, which must be a variable.
    /// - `op`: The compound operator, used in error messages.
    /// - `base`: The plain operator it combines with (`+` for `+=`).
    /// - `lval`: Current value of the left operand.
    /// - `rval`: Value of the right operand.
    /// - `line`: Line number for error reporting.
    pub fn eval_compound_assignment(&mut self,
                                    target: &Expr,
                                    op: BinaryOperator,
                                    base: BinaryOperator,
                                    lval: Value,
                                    rval: Value,
                                    line: usize)
                                    -> EvalResult<Value> {
        let result = eval_binary(base, lval, rval, line)?;
        let name = assignment_target(target, op, line)?;
        self.env.assign(name, result);
        Ok(result)
    }
}
