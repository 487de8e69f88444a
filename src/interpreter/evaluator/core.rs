use log::debug;

use crate::{ast::Expr, error::RuntimeError, interpreter::evaluator::binary::core::eval_binary};

/// Result type used by the evaluator.
///
/// Evaluation returns either a number or a `RuntimeError` describing why no
/// number could be produced.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a number.
///
/// A leaf evaluates to its own value. An operation evaluates both operands
/// first; if either one failed, the failure is returned unchanged (the left
/// one when both failed), so an error anywhere in the tree always reaches the
/// root. Otherwise the operator is applied.
///
/// # Errors
/// Returns `DivisionByZero` if any division in the tree has a zero divisor.
///
/// # Example
/// ```
/// use abacus::{
///     ast::{BinaryOperator, Expr},
///     error::RuntimeError,
///     interpreter::evaluator::core::evaluate,
/// };
///
/// // 3 + 5 / 0
/// let tree = Expr::binary(Expr::number(3.0, 0),
///                         BinaryOperator::Add,
///                         Expr::binary(Expr::number(5.0, 2),
///                                      BinaryOperator::Div,
///                                      Expr::number(0.0, 4),
///                                      3),
///                         1);
///
/// assert_eq!(evaluate(&tree), Err(RuntimeError::DivisionByZero { position: 3 }));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<f64> {
    let result = eval_node(expr);
    debug!("evaluated {expr} to {result:?}");
    result
}

fn eval_node(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::BinaryOp { left, op, right, position } => {
            let left = eval_node(left);
            let right = eval_node(right);
            eval_binary(*op, left?, right?, *position)
        },
    }
}
