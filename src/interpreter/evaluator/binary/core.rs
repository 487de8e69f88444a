use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::{binary::scalar::apply, core::EvalResult},
};

/// Evaluates a binary operation between two numbers.
///
/// Division by a divisor that is exactly zero (either sign) yields
/// `DivisionByZero` whatever the dividend is. Every other combination is
/// computed with standard floating-point semantics.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Atom index of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed number.
///
/// # Example
/// ```
/// use abacus::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::evaluator::binary::core::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 8.0, 3.0, 1), Ok(5.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 5.0, 0.0, 1),
///            Err(RuntimeError::DivisionByZero { position: 1 }));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    if op == BinaryOperator::Div && right == 0.0 {
        return Err(RuntimeError::DivisionByZero { position });
    }

    Ok(apply(op, left, right))
}
