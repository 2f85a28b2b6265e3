use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::eval_comparison, logic::eval_logic, scalar::eval_scalar_op},
            core::{Context, EvalResult},
        },
        value::Value,
    },
};

impl<W: Write> Context<W> {
    /// Evaluates a binary operator applied to two expressions.
    ///
    /// The right operand is always evaluated first. Plain assignment never
    /// evaluates its left side as a value; it only checks that it names a
    /// variable. Every other operator evaluates the left operand second, so
    /// side effects on the right are visible to the left. Compound
    /// assignments then write their result back to the left variable.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: Operator.
    /// - `right`: Right operand.
    /// - `line`: Line number.
    ///
    /// # Example
    /// ```
    /// use arith::{
    ///     ast::{BinaryOperator, Expr, UnaryOperator},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::with_output(Vec::new());
    /// context.env.assign("x", 5);
    ///
    /// // x - ++x: the increment on the right runs before `x` is read.
    /// let x = Expr::Variable { name: "x".into(),
    ///                          line: 1, };
    /// let inc = Expr::UnaryOp { op:   UnaryOperator::PreIncrement,
    ///                           expr: Box::new(x.clone()),
    ///                           line: 1, };
    ///
    /// let v = context.eval_binary_op(&x, BinaryOperator::Sub, &inc, 1)
    ///                .unwrap();
    /// assert_eq!(v, 0);
    /// ```
    pub fn eval_binary_op(&mut self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        let rval = self.eval(right)?;

        if op == BinaryOperator::Assign {
            return self.eval_assignment(left, rval, line);
        }

        let lval = self.eval(left)?;

        if let Some(base) = op.compound_base() {
            return self.eval_compound_assignment(left, op, base, lval, rval, line);
        }

        eval_binary(op, lval, rval, line)
    }
}

/// Evaluates a non-assigning binary operation between two values.
///
/// Arithmetic and bitwise operators go to [`eval_scalar_op`], comparisons to
/// [`eval_comparison`] and `&&`/`||` to [`eval_logic`].
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for `/` with a zero right operand.
/// - [`RuntimeError::MalformedNode`] for assignment operators, which need a
///   variable rather than a value on the left.
///
/// # Example
/// ```
/// use arith::{ast::BinaryOperator, interpreter::evaluator::binary::core::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Add, 3, 4, 1).unwrap(), 7);
/// assert_eq!(eval_binary(BinaryOperator::Less, 3, 4, 1).unwrap(), 1);
/// assert!(eval_binary(BinaryOperator::Div, 3, 0, 1).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, AddAssign, And, AndAssign, Assign, BitAnd, BitOr, BitXor, Div, DivAssign, Equal,
        Greater, GreaterEqual, Less, LessEqual, Mul, MulAssign, NotEqual, Or, OrAssign, Sub,
        SubAssign, XorAssign,
    };

    match op {
        Add | Sub | Mul | Div | BitXor | BitAnd | BitOr => eval_scalar_op(op, left, right, line),

        Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
            eval_comparison(op, left, right, line)
        },

        And | Or => eval_logic(op, left, right, line),

        Assign | AddAssign | SubAssign | MulAssign | DivAssign | AndAssign | OrAssign
        | XorAssign => {
            Err(RuntimeError::MalformedNode { details: format!("'{op}' cannot be applied to two plain values"),
                                              line })
        },
    }
}
