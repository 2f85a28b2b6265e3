use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl<W: Write> Context<W> {
    /// Evaluates `expr` and writes its decimal value as one line of output.
    ///
    /// # Errors
    /// Propagates evaluation errors, and reports a failing sink as
    /// [`RuntimeError::Output`].
    ///
    /// # Example
    /// ```
    /// use arith::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// let expr = Expr::Number { value: -12,
    ///                           line:  1, };
    ///
    /// context.eval_print(&expr, 1).unwrap();
    /// assert_eq!(context.into_output(), b"-12\n");
    /// ```
    pub fn eval_print(&mut self, expr: &Expr, line: usize) -> EvalResult<()> {
        let value = self.eval(expr)?;

        writeln!(self.output_mut(), "{value}").map_err(|source| RuntimeError::Output { source,
                                                                                       line })
    }
}
