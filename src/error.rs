/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, a missing closing parenthesis, oversized literals
/// and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: non-variable
/// assignment targets, undefined variables, division by zero, malformed nodes
/// and scope-stack underflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
