use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_closing_paren,
        },
    },
    util::num::literal_to_value_checked,
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (arithmetic negation)
/// - `!` and `~` (bitwise complement)
/// - `++` and `--` (prefix increment and decrement)
///
/// Unary operators are right-associative, so an input like `-~x` is parsed as
/// `-(~x)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "~" | "++" | "--") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (op, line) = match tokens.peek() {
        Some((Token::Minus, line)) => (UnaryOperator::Negate, *line),
        Some((Token::Bang | Token::Tilde, line)) => (UnaryOperator::Not, *line),
        Some((Token::PlusPlus, line)) => (UnaryOperator::PreIncrement, *line),
        Some((Token::MinusMinus, line)) => (UnaryOperator::PreDecrement, *line),
        _ => return parse_primary(tokens),
    };
    tokens.next();

    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - integer literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := integer
///              | identifier
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => {
            let value = literal_to_value_checked(*value, ParseError::LiteralTooLarge { line: *line })?;
            Ok(Expr::Number { value,
                              line: *line })
        },
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            expect_closing_paren(tokens, *line)?;
            Ok(expr)
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        // `parse_program` replaces the line with that of the last token.
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
