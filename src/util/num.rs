use crate::interpreter::value::Value;

/// Narrows a lexed integer literal to the runtime value type.
///
/// The lexer reads literals as `i64` so that oversized numbers are reported
/// instead of silently wrapping.
///
/// ## Errors
/// Returns `Err(error)` if the literal does not fit in a [`Value`].
///
/// ## Example
/// ```
/// use arith::util::num::literal_to_value_checked;
///
/// assert_eq!(literal_to_value_checked(42, "too big!"), Ok(42));
/// assert_eq!(literal_to_value_checked(1 << 40, "too big!"), Err("too big!"));
/// ```
pub fn literal_to_value_checked<E>(literal: i64, error: E) -> Result<Value, E> {
    Value::try_from(literal).map_err(|_| error)
}
