/// Operand evaluation order and operator dispatch.
pub mod core;

/// Plain and compound assignment.
pub mod assign;

/// Arithmetic and bitwise operators.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Non-short-circuiting `&&` and `||`.
pub mod logic;
