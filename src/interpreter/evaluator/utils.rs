use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::is_truthy,
    },
};

impl<W: Write> Context<W> {
    /// Runs `body` inside a fresh scope.
    ///
    /// The scope is pushed before `body` runs and popped afterwards, on the
    /// error path as well, so the stack depth is the same on exit as on entry.
    /// An error from `body` takes precedence over a failed pop.
    ///
    /// # Example
    /// ```
    /// use arith::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::with_output(Vec::new());
    ///
    /// let depth = context.scoped(|inner| Ok(inner.env.depth())).unwrap();
    ///
    /// assert_eq!(depth, 2);
    /// assert_eq!(context.env.depth(), 1);
    /// ```
    pub fn scoped<T>(&mut self, body: impl FnOnce(&mut Self) -> EvalResult<T>) -> EvalResult<T> {
        self.env.push_scope();
        let result = body(self);
        let popped = self.env.pop_scope();
        let value = result?;
        popped?;
        Ok(value)
    }

    /// Evaluates a condition and applies the truthiness rule.
    pub fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        Ok(is_truthy(self.eval(condition)?))
    }

    /// Evaluates a sequence of statements as a block.
    ///
    /// A new local scope is pushed before execution and removed afterward.
    /// Each statement is evaluated in order.
    ///
    /// # Parameters
    /// - `statements`: Statements inside the block.
    pub fn eval_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        self.scoped(|context| {
                statements.iter()
                          .try_for_each(|statement| context.eval_statement(statement))
            })
    }

    /// Evaluates an `if` statement.
    ///
    /// The condition and the branch that runs share one scope, so a variable
    /// first assigned in a branch is gone once the statement finishes.
    ///
    /// # Parameters
    /// - `condition`: The condition expression.
    /// - `then_branch`: Statement run when the condition is non-zero.
    /// - `else_branch`: Optional statement run otherwise.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: &Statement,
                   else_branch: Option<&Statement>)
                   -> EvalResult<()> {
        self.scoped(|context| {
                if context.eval_condition(condition)? {
                    context.eval_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    context.eval_statement(else_branch)
                } else {
                    Ok(())
                }
            })
    }
}

/// Returns the variable name an assigning operator writes to.
///
/// Assignment, compound assignment, increment and decrement all require a
/// plain variable as their target.
///
/// # Errors
/// Returns [`RuntimeError::ExpectedVariable`] naming `operator` when `target`
/// is anything other than a variable.
///
/// # Example
/// ```
/// use arith::{ast::Expr, error::RuntimeError, interpreter::evaluator::utils::assignment_target};
///
/// let var = Expr::Variable { name: "x".into(),
///                            line: 1, };
/// assert_eq!(assignment_target(&var, "=", 1).unwrap(), "x");
///
/// let number = Expr::Number { value: 3,
///                             line:  1, };
/// assert!(matches!(assignment_target(&number, "+=", 1),
///                  Err(RuntimeError::ExpectedVariable { .. })));
/// ```
pub fn assignment_target<'e>(target: &'e Expr,
                             operator: impl ToString,
                             line: usize)
                             -> EvalResult<&'e str> {
    match target {
        Expr::Variable { name, .. } => Ok(name.as_str()),
        _ => Err(RuntimeError::ExpectedVariable { operator: operator.to_string(),
                                                  line }),
    }
}
