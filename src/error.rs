/// Parsing errors.
///
/// Defines the faults that can occur while turning raw keys, tokens, or atoms
/// into an expression tree. They all point at a caller that handed the engine
/// input it promised never to produce.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the outcomes evaluation can report instead of a number. Division
/// by zero is the only one.
pub mod runtime_error;

pub use parse_error::{AtomFault, ParseError};
pub use runtime_error::RuntimeError;

/// Any error produced on the way from keys to a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The input could not be turned into an expression tree.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression tree could not be reduced to a number.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl CalcError {
    /// Returns `true` if this is a division by zero.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::Runtime(RuntimeError::DivisionByZero { .. }))
    }
}
