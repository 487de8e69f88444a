use crate::{
    ast::Precedence,
    error::{AtomFault, ParseError},
    interpreter::{
        parser::core::{MAX_ATOMS, ParseResult},
        segmenter::Atom,
    },
};

/// Checks that atoms alternate number, operator, number, ..., number.
///
/// A well-formed list has odd length, starts and ends with a number, and
/// never holds two atoms of the same kind next to each other. The first
/// violation found, scanning left to right, is reported.
///
/// # Errors
/// Returns `InvalidAtomSequence` with the matching [`AtomFault`] and the
/// index of the offending atom.
///
/// # Example
/// ```
/// use abacus::{
///     ast::BinaryOperator,
///     error::{AtomFault, ParseError},
///     interpreter::{parser::utils::validate_alternation, segmenter::Atom},
/// };
///
/// let atoms = [Atom::Number(1.0), Atom::Operator(BinaryOperator::Add)];
/// assert_eq!(validate_alternation(&atoms),
///            Err(ParseError::sequence(AtomFault::TrailingOperator, 1)));
/// ```
pub fn validate_alternation(atoms: &[Atom]) -> ParseResult<()> {
    if atoms.is_empty() {
        return Err(ParseError::sequence(AtomFault::Empty, 0));
    }

    for (position, atom) in atoms.iter().enumerate() {
        let expects_number = position % 2 == 0;
        match (expects_number, atom.is_number()) {
            (true, false) if position == 0 => {
                return Err(ParseError::sequence(AtomFault::LeadingOperator, position));
            },
            (true, false) => {
                return Err(ParseError::sequence(AtomFault::ConsecutiveOperators, position));
            },
            (false, true) => {
                return Err(ParseError::sequence(AtomFault::ConsecutiveNumbers, position));
            },
            _ => {},
        }
    }

    if atoms.len() % 2 == 0 {
        return Err(ParseError::sequence(AtomFault::TrailingOperator, atoms.len() - 1));
    }

    Ok(())
}

/// Rejects atom lists longer than [`MAX_ATOMS`].
///
/// # Errors
/// Returns `TooManyAtoms` with the length of the list.
pub fn validate_length(atoms: &[Atom]) -> ParseResult<()> {
    if atoms.len() > MAX_ATOMS {
        return Err(ParseError::TooManyAtoms { count: atoms.len(),
                                              limit: MAX_ATOMS, });
    }
    Ok(())
}

/// Returns the precedence level shared by every operator in the atoms.
///
/// A list without operators has no level and yields `None`.
///
/// # Errors
/// Returns `InvalidAtomSequence` with [`AtomFault::MixedPrecedence`] at the
/// first operator whose level differs from the first operator's.
pub fn uniform_precedence(atoms: &[Atom]) -> ParseResult<Option<Precedence>> {
    let mut level = None;

    for (position, op) in atoms.iter()
                               .enumerate()
                               .filter_map(|(position, atom)| Some((position, atom.as_operator()?)))
    {
        match level {
            None => level = Some(op.precedence()),
            Some(expected) if expected != op.precedence() => {
                return Err(ParseError::sequence(AtomFault::MixedPrecedence, position));
            },
            Some(_) => {},
        }
    }

    Ok(level)
}
