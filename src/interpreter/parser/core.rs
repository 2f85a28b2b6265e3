use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_assignment, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program: statements until the token stream runs out.
///
/// Empty statements are kept; the evaluator drops top-level ones before
/// execution starts. A program that stops mid-statement reports
/// `UnexpectedEndOfInput` on the line of its last token.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use arith::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("x = 1; ; print x;").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.len(), 3);
///
/// let tokens = tokenize("x = 1;\nprint x +").unwrap();
/// let error = parse_program(&mut tokens.iter().peekable()).unwrap_err();
/// assert_eq!(error.to_string(), "Error on line 2: Unexpected end of input.");
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let last_line = tokens.clone().last().map_or(1, |(_, line)| *line);
    let mut statements = Vec::new();

    while tokens.peek().is_some() {
        let statement = parse_statement(tokens).map_err(|error| match error {
                                                   ParseError::UnexpectedEndOfInput { .. } => {
                                                       ParseError::UnexpectedEndOfInput { line: last_line }
                                                   },
                                                   other => other,
                                               })?;
        statements.push(statement);
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, assignment, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_assignment(tokens)
}
