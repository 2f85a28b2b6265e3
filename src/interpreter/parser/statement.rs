use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_closing_paren, expect_token, parse_parenthesized},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an empty statement (`;`),
/// - a block (`{ ... }`),
/// - `if` with an optional `else`,
/// - a `while`, `do ... while` or `for` loop,
/// - `print <expression>;`,
/// - comma-separated expressions terminated by `;`.
///
/// The leading token decides which construct is parsed; anything that is not a
/// keyword or brace is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    // `parse_program` replaces the line with that of the last token.
    let Some((token, line)) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = *line;

    match token {
        Token::Semicolon => {
            tokens.next();
            Ok(Statement::Empty { line })
        },
        Token::LBrace => {
            tokens.next();
            parse_block(tokens, line)
        },
        Token::If => {
            tokens.next();
            parse_if(tokens, line)
        },
        Token::While => {
            tokens.next();
            parse_while(tokens, line)
        },
        Token::Do => {
            tokens.next();
            parse_do_while(tokens, line)
        },
        Token::For => {
            tokens.next();
            parse_for(tokens, line)
        },
        Token::Print => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect_token(tokens, &Token::Semicolon, line)?;
            Ok(Statement::Print { expr, line })
        },
        _ => parse_expression_statement(tokens, line),
    }
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>) <statement>
///     if (<condition>) <statement> else <statement>
/// ```
/// A dangling `else` binds to the nearest `if`.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_parenthesized(tokens, line)?;
    let then_branch = parse_statement(tokens)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(Box::new(parse_statement(tokens)?))
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses `while (<condition>) <statement>`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_parenthesized(tokens, line)?;
    let body = parse_statement(tokens)?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          line })
}

/// Parses `do <statement> while (<condition>);`.
fn parse_do_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let body = parse_statement(tokens)?;
    expect_token(tokens, &Token::While, line)?;
    let condition = parse_parenthesized(tokens, line)?;
    expect_token(tokens, &Token::Semicolon, line)?;

    Ok(Statement::DoWhile { body: Box::new(body),
                            condition,
                            line })
}

/// Parses a `for` loop.
///
/// Syntax:
/// ```text
///     for (<statement> <condition>; <step>) <statement>
/// ```
/// The initializer is a full statement and brings its own `;`, so
/// `for (; i < 3; i += 1)` uses an empty initializer.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen, line)?;
    let init = parse_statement(tokens)?;
    let condition = parse_expression(tokens)?;
    expect_token(tokens, &Token::Semicolon, line)?;
    let step = parse_expression(tokens)?;
    expect_closing_paren(tokens, line)?;
    let body = parse_statement(tokens)?;

    Ok(Statement::For { init: Box::new(init),
                        condition,
                        step,
                        body: Box::new(body),
                        line })
}

/// Parses `<expression> ("," <expression>)* ";"`.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut exprs = vec![parse_expression(tokens)?];

    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        exprs.push(parse_expression(tokens)?);
    }
    expect_token(tokens, &Token::Semicolon, line)?;

    Ok(Statement::Expression { exprs, line })
}
