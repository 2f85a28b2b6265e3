/// The evaluator module executes AST nodes.
///
/// The evaluator walks the AST, runs statements for their control-flow
/// effects, evaluates expressions to integers and performs variable writes
/// through the environment. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Dispatches on every statement and expression kind.
/// - Manages scope entry and exit for blocks, `if` and loops.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The environment module holds variable bindings.
///
/// The environment is a stack of scope frames searched from the innermost
/// frame outward. The bottom frame is the program-global scope and is never
/// popped.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Skips whitespace and comments.
/// - Reports characters that do not start any token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Encodes operator precedence and associativity.
/// - Reports syntax errors with line information.
pub mod parser;
/// The value module defines the runtime value type.
///
/// The language has a single value type, a 32-bit signed integer, which also
/// stands in for booleans.
pub mod value;
