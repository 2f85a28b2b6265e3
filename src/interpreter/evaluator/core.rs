use std::io::{self, Stdout, Write};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one program run: the scope
/// stack and the sink that `print` statements write to.
///
/// ## Usage
///
/// `Context` is created once per program. [`Context::execute_program`] runs a
/// parsed program; [`Context::eval_statement`] and [`Context::eval`] evaluate
/// single nodes against the current state.
pub struct Context<W: Write = Stdout> {
    /// Variable bindings, innermost scope last.
    pub env: Environment,
    out:     W,
}

impl Context {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Context<W> {
    /// Creates a context with an empty global scope that prints to `out`.
    ///
    /// # Example
    /// ```
    /// use arith::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::with_output(Vec::new());
    /// assert_eq!(context.env.depth(), 1);
    /// ```
    pub fn with_output(out: W) -> Self {
        Self { env: Environment::new(),
               out }
    }

    /// Returns the output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the context and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    pub(crate) fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Runs a whole program.
    ///
    /// Top-level empty statements are dropped once, up front; the remaining
    /// statements run in order against the global scope. The first error
    /// aborts the run.
    ///
    /// # Example
    /// ```
    /// use arith::{
    ///     ast::{Expr, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let program = vec![Statement::Empty { line: 1 },
    ///                    Statement::Print { expr: Expr::Number { value: 7,
    ///                                                            line:  2, },
    ///                                       line: 2, }];
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.execute_program(&program).unwrap();
    ///
    /// assert_eq!(context.into_output(), b"7\n");
    /// ```
    pub fn execute_program(&mut self, program: &[Statement]) -> EvalResult<()> {
        let statements: Vec<&Statement> =
            program.iter()
                   .filter(|statement| !matches!(statement, Statement::Empty { .. }))
                   .collect();
        debug!(statements = statements.len(), "executing program");

        for statement in statements {
            self.eval_statement(statement)?;
        }

        debug!(depth = self.env.depth(), "program finished");
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// Blocks, `if` and the loops run inside their own scope; expression
    /// statements are evaluated for their side effects; `print` writes one
    /// line to the output sink.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        trace!(line = statement.line_number(), "statement");

        match statement {
            Statement::Empty { .. } => Ok(()),
            Statement::Block { statements, .. } => self.eval_block(statements),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.eval_if(condition, then_branch, else_branch.as_deref()),
            Statement::While { condition, body, .. } => self.eval_while(condition, body),
            Statement::DoWhile { body, condition, .. } => self.eval_do_while(body, condition),
            Statement::For { init,
                             condition,
                             step,
                             body,
                             .. } => self.eval_for(init, condition, step, body),
            Statement::Expression { exprs, .. } => {
                for expr in exprs {
                    self.eval(expr)?;
                }
                Ok(())
            },
            Statement::Print { expr, line } => self.eval_print(expr, *line),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Assignments,
    /// compound assignments and prefix increments write to the environment as
    /// part of producing their value.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Example
    /// ```
    /// use arith::{ast::Expr, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.env.assign("x", 41);
    ///
    /// let expr = Expr::Variable { name: "x".into(),
    ///                             line: 1, };
    /// assert_eq!(context.eval(&expr).unwrap(), 41);
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.env.lookup(name, *line),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line),
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line)
            },
        }
    }
}
