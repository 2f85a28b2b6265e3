/// The single runtime value type.
///
/// Every expression evaluates to a 32-bit signed integer. Arithmetic on values
/// wraps on overflow (two's complement), and integers double as booleans: zero
/// is false, everything else is true.
pub type Value = i32;

/// Returns `true` when a value counts as true in a condition.
///
/// # Example
/// ```
/// use arith::interpreter::value::is_truthy;
///
/// assert!(is_truthy(-3));
/// assert!(!is_truthy(0));
/// ```
#[must_use]
pub const fn is_truthy(value: Value) -> bool {
    value != 0
}

/// Converts a boolean into the canonical integer form used by comparisons and
/// logical operators.
///
/// # Example
/// ```
/// use arith::interpreter::value::from_bool;
///
/// assert_eq!(from_bool(true), 1);
/// assert_eq!(from_bool(false), 0);
/// ```
#[must_use]
pub const fn from_bool(flag: bool) -> Value {
    if flag { 1 } else { 0 }
}
