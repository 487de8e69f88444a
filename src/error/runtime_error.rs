use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all outcomes of evaluation that are not a number.
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error at atom {position}: Division by zero.")]
    DivisionByZero {
        /// Index of the `/` atom whose divisor was zero.
        position: usize,
    },
}
