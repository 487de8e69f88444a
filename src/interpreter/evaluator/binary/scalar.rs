use crate::ast::BinaryOperator;

/// Adds two numbers.
#[must_use]
pub fn add(left: f64, right: f64) -> f64 {
    left + right
}

/// Subtracts `right` from `left`.
#[must_use]
pub fn subtract(left: f64, right: f64) -> f64 {
    left - right
}

/// Multiplies two numbers.
#[must_use]
pub fn multiply(left: f64, right: f64) -> f64 {
    left * right
}

/// Divides `left` by `right`.
///
/// This is plain IEEE 754 division: a zero divisor yields an infinity or NaN.
/// Callers that must reject zero divisors check before calling.
#[must_use]
pub fn divide(left: f64, right: f64) -> f64 {
    left / right
}

/// Applies an operator to two numbers.
///
/// Total over all `f64` inputs; overflow produces infinities.
///
/// # Example
/// ```
/// use abacus::{ast::BinaryOperator, interpreter::evaluator::binary::scalar::apply};
///
/// assert_eq!(apply(BinaryOperator::Mul, 1.5, 2.0), 3.0);
/// assert_eq!(apply(BinaryOperator::Mul, f64::MAX, 2.0), f64::INFINITY);
/// ```
#[must_use]
pub fn apply(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => add(left, right),
        BinaryOperator::Sub => subtract(left, right),
        BinaryOperator::Mul => multiply(left, right),
        BinaryOperator::Div => divide(left, right),
    }
}
