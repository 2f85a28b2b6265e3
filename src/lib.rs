//! # arith
//!
//! arith is a tree-walking interpreter for a small C-like language over 32-bit
//! signed integers. Programs are made of assignments, `print` statements,
//! blocks, `if`/`else` and the three C loops; every expression produces an
//! integer and zero is the only false value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    error::Error,
    io::{self, Write},
};

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and the operator
/// types that represent a program as a tree. The AST is built by the parser,
/// traversed by the evaluator and can be printed back as source.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Every error carries the line it was raised on so that messages can point
/// back into the source.
pub mod error;
/// Lexing, parsing, scoping and evaluation.
pub mod interpreter;
/// Helpers shared by several phases.
pub mod util;

/// Lexes and parses `source` into a list of top-level statements.
///
/// # Errors
/// Returns a [`ParseError`] for characters the lexer does not recognise and
/// for any syntax error.
///
/// # Examples
/// ```
/// use arith::parse_source;
///
/// let program = parse_source("x = 1; print x;").unwrap();
/// assert_eq!(program.len(), 2);
///
/// assert!(parse_source("print (1 + 2;").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens =
        tokenize(source).map_err(|(token, line)| ParseError::UnexpectedToken { token, line })?;

    let mut iter = tokens.iter().peekable();
    parse_program(&mut iter)
}

/// Parses and runs `source`, writing everything it prints to `out`.
///
/// Nothing runs if the program fails to parse. A runtime error stops the
/// program; lines printed before it stay in `out`.
///
/// # Examples
/// ```
/// use arith::run_with_output;
///
/// let mut out = Vec::new();
/// run_with_output("x = 6; x *= 7; print x;", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "42\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, out: &mut W) -> Result<(), Box<dyn Error>> {
    let program = parse_source(source)?;

    let mut context = Context::with_output(out);
    context.execute_program(&program)?;

    Ok(())
}

/// Parses and runs `source`, printing to standard output.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use arith::get_result;
///
/// assert!(get_result("a = 2 + 2; print a;").is_ok());
///
/// // `b` is never assigned.
/// assert!(get_result("print b + 1;").is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_output(source, &mut handle)
}
