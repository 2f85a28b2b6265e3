use std::fmt;

use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every expression evaluates to a single [`Value`]. Some expressions also
/// write to the environment as a side effect: assignments, compound
/// assignments and the prefix increment/decrement operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (e.g. negation or `++x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation, including assignment and compound assignment.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use arith::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// Represents a statement.
///
/// Statements own their child statements and expressions exclusively; the
/// evaluator only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A lone `;`. Does nothing.
    Empty {
        /// Line number in the source code.
        line: usize,
    },
    /// A braced sequence of statements with its own scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `if (condition) then_branch` with an optional `else` branch.
    ///
    /// The condition and whichever branch runs share one scope.
    If {
        /// The condition expression.
        condition:   Expr,
        /// Statement executed when the condition is true.
        then_branch: Box<Self>,
        /// Statement executed when the condition is false, if present.
        else_branch: Option<Box<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (condition) body`.
    While {
        /// Checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// `do body while (condition);`. The body runs at least once.
    DoWhile {
        /// The loop body.
        body:      Box<Self>,
        /// Checked after every iteration.
        condition: Expr,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for (init condition; step) body`.
    For {
        /// Runs once before the first condition check.
        init:      Box<Self>,
        /// Checked before every iteration.
        condition: Expr,
        /// Evaluated after every iteration.
        step:      Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Comma-separated expressions evaluated for their side effects.
    Expression {
        /// The expressions, in evaluation order.
        exprs: Vec<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `print expr;`
    Print {
        /// The expression whose value is written.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Empty { line }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::DoWhile { line, .. }
            | Self::For { line, .. }
            | Self::Expression { line, .. }
            | Self::Print { line, .. } => *line,
        }
    }

    /// Whether the printed form ends in an `if` that has no `else`, so a
    /// following `else` would attach to it.
    fn ends_with_open_if(&self) -> bool {
        match self {
            Self::If { else_branch: None, .. } => true,
            Self::If { else_branch: Some(else_branch),
                       .. } => else_branch.ends_with_open_if(),
            Self::While { body, .. } | Self::For { body, .. } => body.ends_with_open_if(),
            Self::Empty { .. }
            | Self::Block { .. }
            | Self::DoWhile { .. }
            | Self::Expression { .. }
            | Self::Print { .. } => false,
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Self::Empty { .. } => write!(f, ";"),
            Self::Block { statements, .. } => {
                writeln!(f, "{{")?;
                for statement in statements {
                    write!(f, "{:width$}", "", width = (depth + 1) * 4)?;
                    statement.fmt_indented(f, depth + 1)?;
                    writeln!(f)?;
                }
                write!(f, "{:width$}}}", "", width = depth * 4)
            },
            Self::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                write!(f, "if ({condition}) ")?;
                // An `else` after an open inner `if` would bind to it instead.
                if else_branch.is_some() && then_branch.ends_with_open_if() {
                    writeln!(f, "{{")?;
                    write!(f, "{:width$}", "", width = (depth + 1) * 4)?;
                    then_branch.fmt_indented(f, depth + 1)?;
                    writeln!(f)?;
                    write!(f, "{:width$}}}", "", width = depth * 4)?;
                } else {
                    then_branch.fmt_indented(f, depth)?;
                }
                if let Some(else_branch) = else_branch {
                    write!(f, " else ")?;
                    else_branch.fmt_indented(f, depth)?;
                }
                Ok(())
            },
            Self::While { condition, body, .. } => {
                write!(f, "while ({condition}) ")?;
                body.fmt_indented(f, depth)
            },
            Self::DoWhile { body, condition, .. } => {
                write!(f, "do ")?;
                body.fmt_indented(f, depth)?;
                write!(f, " while ({condition});")
            },
            Self::For { init,
                        condition,
                        step,
                        body,
                        .. } => {
                write!(f, "for (")?;
                init.fmt_indented(f, depth)?;
                write!(f, " {condition}; {step}) ")?;
                body.fmt_indented(f, depth)
            },
            Self::Expression { exprs, .. } => {
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{expr}")?;
                }
                write!(f, ";")
            },
            Self::Print { expr, .. } => write!(f, "print {expr};"),
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Bitwise complement of every bit (`~x` or `!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Prefix decrement (`--x`). The operand must be a variable.
    PreDecrement,
    /// Prefix increment (`++x`). The operand must be a variable.
    PreIncrement,
}

/// Represents a binary operator.
///
/// Besides arithmetic, bitwise, comparison and logical operators this includes
/// plain assignment and the compound assignments, which write their result
/// back to the variable on the left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and, both sides always evaluated (`&&`)
    And,
    /// Logical or, both sides always evaluated (`||`)
    Or,
    /// Assignment (`=`)
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
}

impl BinaryOperator {
    /// Returns the plain operator a compound assignment combines with, or
    /// `None` for every other operator.
    ///
    /// # Example
    /// ```
    /// use arith::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::AddAssign.compound_base(),
    ///            Some(BinaryOperator::Add));
    /// assert_eq!(BinaryOperator::Assign.compound_base(), None);
    /// ```
    #[must_use]
    pub const fn compound_base(self) -> Option<Self> {
        match self {
            Self::AddAssign => Some(Self::Add),
            Self::SubAssign => Some(Self::Sub),
            Self::MulAssign => Some(Self::Mul),
            Self::DivAssign => Some(Self::Div),
            Self::AndAssign => Some(Self::BitAnd),
            Self::OrAssign => Some(Self::BitOr),
            Self::XorAssign => Some(Self::BitXor),
            _ => None,
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "~",
            Self::Negate => "-",
            Self::PreDecrement => "--",
            Self::PreIncrement => "++",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, AddAssign, And, AndAssign, Assign, BitAnd, BitOr, BitXor, Div, DivAssign, Equal,
            Greater, GreaterEqual, Less, LessEqual, Mul, MulAssign, NotEqual, Or, OrAssign, Sub,
            SubAssign, XorAssign,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            BitXor => "^",
            BitAnd => "&",
            BitOr => "|",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            AndAssign => "&=",
            OrAssign => "|=",
            XorAssign => "^=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable { name, .. } => write!(f, "{name}"),
            // `-(-x)` and `-(-5)` must not print as `--x` or `--5`.
            Self::UnaryOp { op, expr, .. } => match **expr {
                Self::UnaryOp { .. } => write!(f, "{op}({expr})"),
                Self::Number { value, .. } if value < 0 => write!(f, "{op}({expr})"),
                _ => write!(f, "{op}{expr}"),
            },
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
