/// Binary operator evaluation logic.
///
/// Applies the four arithmetic operators to evaluated operands and turns a
/// zero divisor into an error value.
pub mod binary;

/// Core evaluation logic.
///
/// Walks the expression tree bottom-up and propagates errors to the root.
pub mod core;
