use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses assignment and compound-assignment expressions.
///
/// Assignment is right-associative, so `a = b = 3` parses as `a = (b = 3)`.
/// Any expression is accepted on the left; whether it is assignable is checked
/// during evaluation.
///
/// Grammar: `assignment := logical_or (assign_op assignment)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` for an assignment, otherwise the logical-or expression.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_logical_or(tokens)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_assignment_operator(token)
    {
        let line = *line;
        tokens.next();

        let right = parse_assignment(tokens)?;
        return Ok(Expr::BinaryOp { left: Box::new(left),
                                   op,
                                   right: Box::new(right),
                                   line });
    }

    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := bit_or ("&&" bit_or)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::And], parse_bit_or)
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bit_or := bit_xor ("|" bit_xor)*`
pub fn parse_bit_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::BitOr], parse_bit_xor)
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bit_xor := bit_and ("^" bit_and)*`
pub fn parse_bit_xor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::BitXor], parse_bit_and)
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bit_and := equality ("&" equality)*`
pub fn parse_bit_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, &[BinaryOperator::BitAnd], parse_equality)
}

/// Parses equality operators `==` and `!=`.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Equal, BinaryOperator::NotEqual],
                           parse_relational)
}

/// Parses ordering comparisons.
///
/// Grammar: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Less,
                             BinaryOperator::LessEqual,
                             BinaryOperator::Greater,
                             BinaryOperator::GreaterEqual],
                           parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Add, BinaryOperator::Sub],
                           parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           &[BinaryOperator::Mul, BinaryOperator::Div],
                           parse_unary)
}

/// Parses one left-associative precedence level.
///
/// Operands come from `parse_operand`; any operator in `operators` joins the
/// expression so far with the next operand.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 operators: &[BinaryOperator],
                                 parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;

    while let Some((token, line)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if operators.contains(&op) => op,
            _ => break,
        };

        let line = *line;
        tokens.next();

        let right = parse_operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Maps a token to its corresponding non-assigning binary operator.
///
/// Returns `None` for all other tokens, including the assignment operators.
///
/// # Example
/// ```
/// use arith::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::PlusAssign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::DoublePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Maps a token to its assignment operator (`=`, `+=`, `-=`, ...).
///
/// # Example
/// ```
/// use arith::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_assignment_operator},
/// };
///
/// assert_eq!(token_to_assignment_operator(&Token::XorAssign),
///            Some(BinaryOperator::XorAssign));
/// assert_eq!(token_to_assignment_operator(&Token::EqualEqual), None);
/// ```
#[must_use]
pub const fn token_to_assignment_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Equals => Some(BinaryOperator::Assign),
        Token::PlusAssign => Some(BinaryOperator::AddAssign),
        Token::MinusAssign => Some(BinaryOperator::SubAssign),
        Token::MulAssign => Some(BinaryOperator::MulAssign),
        Token::DivAssign => Some(BinaryOperator::DivAssign),
        Token::AndAssign => Some(BinaryOperator::AndAssign),
        Token::OrAssign => Some(BinaryOperator::OrAssign),
        Token::XorAssign => Some(BinaryOperator::XorAssign),
        _ => None,
    }
}
