use std::iter::Peekable;

use crate::{
    ast::{Expr, Precedence},
    error::{AtomFault, ParseError},
    interpreter::{parser::core::ParseResult, segmenter::Atom},
};

/// Parses addition and subtraction chains.
///
/// Handles the left-associative low-precedence operators `+` and `-`. Each
/// operand is a multiplicative chain, so `*` and `/` always end up below the
/// `+` and `-` nodes that surround them.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `atoms`: Atom stream paired with atom indices.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression, or a single
/// `Expr::Number` if there is no operator.
pub fn parse_additive<'a, I>(atoms: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Atom)>
{
    let mut left = parse_multiplicative(atoms, None)?;
    loop {
        if let Some((position, atom)) = atoms.peek()
           && let Some(op) = atom.as_operator()
           && op.precedence() == Precedence::Low
        {
            let position = *position;
            atoms.next();
            let right = parse_multiplicative(atoms, Some(position))?;
            left = Expr::binary(left, op, right, position);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division chains.
///
/// Handles the left-associative high-precedence operators `*` and `/`:
/// `6 * 4 / 2 * 3` becomes `((6 * 4) / 2) * 3`.
///
/// The rule is: `multiplicative := number (("*" | "/") number)*`
///
/// # Parameters
/// - `atoms`: Atom stream paired with atom indices.
/// - `after`: Index of the operator this chain is the right operand of, or
///   `None` at the start of the expression.
///
/// # Returns
/// A left-leaning tree of high-precedence operations.
pub fn parse_multiplicative<'a, I>(atoms: &mut Peekable<I>,
                                   after: Option<usize>)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Atom)>
{
    let mut left = parse_number(atoms, after)?;
    loop {
        if let Some((position, atom)) = atoms.peek()
           && let Some(op) = atom.as_operator()
           && op.precedence() == Precedence::High
        {
            let position = *position;
            atoms.next();
            let right = parse_number(atoms, Some(position))?;
            left = Expr::binary(left, op, right, position);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a single number atom into a leaf.
///
/// # Errors
/// - `LeadingOperator` or `ConsecutiveOperators` if the next atom is an
///   operator.
/// - `TrailingOperator` if the stream ends right after an operator.
/// - `Empty` if the stream is empty at the start of the expression.
pub fn parse_number<'a, I>(atoms: &mut Peekable<I>, after: Option<usize>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Atom)>
{
    match (atoms.next(), after) {
        (Some((position, Atom::Number(value))), _) => Ok(Expr::number(*value, position)),
        (Some((position, Atom::Operator(_))), None) => {
            Err(ParseError::sequence(AtomFault::LeadingOperator, position))
        },
        (Some((position, Atom::Operator(_))), Some(_)) => {
            Err(ParseError::sequence(AtomFault::ConsecutiveOperators, position))
        },
        (None, Some(operator)) => Err(ParseError::sequence(AtomFault::TrailingOperator, operator)),
        (None, None) => Err(ParseError::sequence(AtomFault::Empty, 0)),
    }
}
