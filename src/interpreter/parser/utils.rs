use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Consumes the next token, which must equal `expected`.
///
/// Returns the line the token was found on.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token that must come next.
/// - `line`: Line reported if the input has already ended.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a different token is found,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          line: usize)
                                                          -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, l)) if tok == expected => Ok(*l),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses `"(" expression ")"` as used by `if`, `while` and `do ... while`
/// headers.
///
/// # Errors
/// Returns a `ParseError` if either parenthesis is missing or the expression
/// fails to parse.
pub(in crate::interpreter::parser) fn parse_parenthesized<'a, I>(
    tokens: &mut Peekable<I>,
    line: usize)
    -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen, line)?;
    let expr = parse_expression(tokens)?;
    expect_closing_paren(tokens, line)?;
    Ok(expr)
}

/// Consumes a `)`, reporting [`ParseError::ExpectedClosingParen`] otherwise.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  line: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((_, l)) => Err(ParseError::ExpectedClosingParen { line: *l }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}
