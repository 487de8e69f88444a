/// Operator dispatch and the division-by-zero check.
pub mod core;

/// Arithmetic primitives on `f64` operands.
pub mod scalar;
