use std::io::Write;

use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates a `while` loop.
    ///
    /// One scope is pushed before the first condition check and popped after
    /// the loop ends. The same frame persists across iterations, so a variable
    /// first assigned directly in the body keeps its value into the next
    /// iteration.
    ///
    /// # Parameters
    /// - `condition`: Checked before every iteration.
    /// - `body`: The loop body.
    ///
    /// # Example
    /// ```
    /// use arith::{
    ///     ast::{Expr, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// // while (0) print 1;
    /// let condition = Expr::Number { value: 0,
    ///                                line:  1, };
    /// let body = Statement::Print { expr: Expr::Number { value: 1,
    ///                                                    line:  1, },
    ///                               line: 1, };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.eval_while(&condition, &body).unwrap();
    ///
    /// assert!(context.output().is_empty());
    /// ```
    pub fn eval_while(&mut self, condition: &Expr, body: &Statement) -> EvalResult<()> {
        self.scoped(|context| {
                while context.eval_condition(condition)? {
                    context.eval_statement(body)?;
                }
                Ok(())
            })
    }

    /// Evaluates a `do ... while` loop.
    ///
    /// The body runs once before the condition is first checked. Like
    /// `while`, the whole loop shares one scope, pushed on entry and popped
    /// on exit.
    ///
    /// # Parameters
    /// - `body`: The loop body.
    /// - `condition`: Checked after every iteration.
    pub fn eval_do_while(&mut self, body: &Statement, condition: &Expr) -> EvalResult<()> {
        self.scoped(|context| {
                loop {
                    context.eval_statement(body)?;
                    if !context.eval_condition(condition)? {
                        break Ok(());
                    }
                }
            })
    }

    /// Evaluates a `for` loop.
    ///
    /// A single scope spans the initializer, every condition check, body run
    /// and step, and is popped once the loop ends. The loop variable is
    /// therefore visible to the final (failing) condition check but not after
    /// the statement.
    ///
    /// # Parameters
    /// - `init`: Runs once before the first condition check.
    /// - `condition`: Checked before every iteration.
    /// - `step`: Evaluated after every iteration.
    /// - `body`: The loop body.
    pub fn eval_for(&mut self,
                    init: &Statement,
                    condition: &Expr,
                    step: &Expr,
                    body: &Statement)
                    -> EvalResult<()> {
        self.scoped(|context| {
                context.eval_statement(init)?;
                while context.eval_condition(condition)? {
                    context.eval_statement(body)?;
                    context.eval(step)?;
                }
                Ok(())
            })
    }
}
