/// Binary operator evaluation logic.
///
/// Handles operand evaluation order, assignment, compound assignment,
/// arithmetic, bitwise, comparison and logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements bitwise complement, negation and the prefix increment and
/// decrement operators.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the program entry point and the statement
/// and expression dispatch.
pub mod core;

/// Evaluation of `while`, `do ... while` and `for` loops.
pub mod loops;

/// Evaluation of `print` statements.
pub mod print;

/// Utility functions for evaluation.
///
/// Scope handling, blocks, conditionals and variable access shared by the
/// dispatchers.
pub mod utils;
