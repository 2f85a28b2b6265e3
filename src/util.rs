/// Numeric conversion helpers.
///
/// Checked conversions from the wide integers produced by the lexer into the
/// 32-bit runtime value type, so out-of-range literals are reported rather than
/// truncated.
pub mod num;
