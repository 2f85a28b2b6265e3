use logos::{Lexer, Logos, Skip};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `for`
    #[token("for")]
    For,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    #[token("/*", skip_block_comment)]
    MultiLineComment,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `+=`
    #[token("+=")]
    PlusAssign,
    /// `-=`
    #[token("-=")]
    MinusAssign,
    /// `*=`
    #[token("*=")]
    MulAssign,
    /// `/=`
    #[token("/=")]
    DivAssign,
    /// `&=`
    #[token("&=")]
    AndAssign,
    /// `|=`
    #[token("|=")]
    OrAssign,
    /// `^=`
    #[token("^=")]
    XorAssign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `|`
    #[token("|")]
    Pipe,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `~`
    #[token("~")]
    Tilde,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes `source` into `(Token, line)` pairs.
///
/// Lines are counted from 1.
///
/// # Errors
/// Returns the offending slice and its line when a character does not start
/// any token.
///
/// # Example
/// ```
/// use arith::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x += 2;\nprint x;").unwrap();
/// assert_eq!(tokens[1], (Token::PlusAssign, 1));
/// assert_eq!(tokens[4], (Token::Print, 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, (String, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => return Err((lexer.slice().to_string(), lexer.extras.line)),
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits overflow an `i64`, which makes the lexer
/// report the slice as an error.
fn parse_integer(lex: &Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Skips the rest of a `//` comment, leaving the newline for the line counter.
fn skip_line_comment(lex: &mut Lexer<Token>) -> Skip {
    let len = lex.remainder().find('\n').unwrap_or(lex.remainder().len());
    lex.bump(len);
    Skip
}

/// Skips a `/* ... */` comment, counting the newlines inside it.
///
/// An unterminated comment swallows the rest of the input.
fn skip_block_comment(lex: &mut Lexer<Token>) -> Skip {
    let remainder = lex.remainder();
    let len = remainder.find("*/").map_or(remainder.len(), |end| end + 2);
    lex.extras.line += remainder[..len].matches('\n').count();
    lex.bump(len);
    Skip
}
