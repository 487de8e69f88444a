use thiserror::Error;

/// The way an atom list breaks the number/operator alternation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AtomFault {
    /// There are no atoms at all.
    Empty,
    /// The list starts with an operator.
    LeadingOperator,
    /// The list ends with an operator.
    TrailingOperator,
    /// Two operators follow each other.
    ConsecutiveOperators,
    /// Two numbers follow each other.
    ConsecutiveNumbers,
    /// A chain mixes operators of different precedence levels.
    MixedPrecedence,
}

impl std::fmt::Display for AtomFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Empty => "expression is empty",
            Self::LeadingOperator => "expression starts with an operator",
            Self::TrailingOperator => "expression ends with an operator",
            Self::ConsecutiveOperators => "two operators in a row",
            Self::ConsecutiveNumbers => "two numbers in a row",
            Self::MixedPrecedence => "chain mixes precedence levels",
        };
        write!(f, "{description}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing, segmenting or tree
/// construction.
pub enum ParseError {
    /// Found text that is not a calculator key, or a command key where only
    /// numbers and operators are allowed.
    #[error("Error at {position}: Unexpected key: {key}.")]
    UnexpectedKey {
        /// The offending text.
        key:      String,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A run of value tokens did not form a decimal number.
    #[error("Error at token {position}: Invalid number literal '{literal}'.")]
    InvalidLiteral {
        /// The accumulated literal.
        literal:  String,
        /// Index of the first token of the literal.
        position: usize,
    },
    /// The atom list does not alternate number, operator, number, ...
    #[error("Error at atom {position}: Invalid atom sequence: {fault}.")]
    InvalidAtomSequence {
        /// What is wrong with the sequence.
        fault:    AtomFault,
        /// Index of the first offending atom.
        position: usize,
    },
    /// The atom list is longer than a tree can be built for.
    #[error("Error at atom {limit}: Expression is too long ({count} atoms, at most {limit}).")]
    TooManyAtoms {
        /// Number of atoms in the list.
        count: usize,
        /// The most atoms a tree is built for.
        limit: usize,
    },
}

impl ParseError {
    /// Shorthand for an [`ParseError::InvalidAtomSequence`].
    #[must_use]
    pub const fn sequence(fault: AtomFault, position: usize) -> Self {
        Self::InvalidAtomSequence { fault, position }
    }
}
