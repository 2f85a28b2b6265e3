/// Core parsing entry points.
///
/// Defines the parse result type and the program and expression entry points.
pub mod core;

/// Unary expression parsing.
///
/// Handles prefix operators, literals, variables and parenthesized groups.
pub mod unary;

/// Binary expression parsing.
///
/// Implements the precedence climb from assignment down to multiplication.
pub mod binary;

/// Block parsing.
///
/// Parses braced statement sequences.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectation helpers shared by the statement and expression parsers.
pub mod utils;

/// Statement parsing.
///
/// Implements `if`, loops, `print`, empty statements and expression
/// statements.
pub mod statement;
