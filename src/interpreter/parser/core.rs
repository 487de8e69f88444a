use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    error::{AtomFault, ParseError},
    interpreter::{
        parser::{
            binary::parse_additive,
            utils::{uniform_precedence, validate_alternation, validate_length},
        },
        segmenter::Atom,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The most atoms a tree is built for.
///
/// Trees are walked recursively, one frame per level, and a chain of `n`
/// operators nests `n` levels deep. The limit keeps that depth well inside
/// the default thread stack.
pub const MAX_ATOMS: usize = 2047;

/// Builds the expression tree for a list of atoms.
///
/// This is the entry point for tree construction. The atoms are checked for
/// strict number/operator alternation first, then parsed starting at the
/// lowest precedence level. A single number short-circuits to a leaf.
///
/// Grammar:
/// ```text
/// expression     := additive
/// additive       := multiplicative (("+" | "-") multiplicative)*
/// multiplicative := number (("*" | "/") number)*
/// ```
///
/// # Errors
/// - `InvalidAtomSequence` if the atoms do not alternate.
/// - `TooManyAtoms` if there are more than [`MAX_ATOMS`] atoms.
///
/// # Example
/// ```
/// use abacus::{
///     ast::BinaryOperator,
///     interpreter::{parser::core::build_tree, segmenter::Atom},
/// };
///
/// // 2 + 3 * 4
/// let atoms = [Atom::Number(2.0),
///              Atom::Operator(BinaryOperator::Add),
///              Atom::Number(3.0),
///              Atom::Operator(BinaryOperator::Mul),
///              Atom::Number(4.0)];
///
/// let tree = build_tree(&atoms).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
/// ```
pub fn build_tree(atoms: &[Atom]) -> ParseResult<Expr> {
    validate_alternation(atoms)?;
    validate_length(atoms)?;

    if let [Atom::Number(value)] = atoms {
        return Ok(Expr::number(*value, 0));
    }

    let mut iter = atoms.iter().enumerate().peekable();
    let tree = parse_additive(&mut iter)?;
    expect_end(&mut iter)?;

    debug!("built tree {tree} from {} atoms", atoms.len());
    Ok(tree)
}

/// Builds the left-associative tree of a single-precedence chain.
///
/// Every operator in the atoms must share one precedence level. The last
/// operator becomes the root, its right operand is the final number and its
/// left operand is the chain of everything before it.
///
/// # Errors
/// - `InvalidAtomSequence` if the atoms do not alternate.
/// - `InvalidAtomSequence` with `MixedPrecedence` if both levels appear.
/// - `TooManyAtoms` if there are more than [`MAX_ATOMS`] atoms.
///
/// # Example
/// ```
/// use abacus::{
///     ast::BinaryOperator::{Div, Mul},
///     interpreter::{parser::core::build_chain, segmenter::Atom},
/// };
///
/// // 6 * 4 / 2 * 3
/// let atoms = [Atom::Number(6.0),
///              Atom::Operator(Mul),
///              Atom::Number(4.0),
///              Atom::Operator(Div),
///              Atom::Number(2.0),
///              Atom::Operator(Mul),
///              Atom::Number(3.0)];
///
/// assert_eq!(build_chain(&atoms).unwrap().to_string(), "(((6 * 4) / 2) * 3)");
/// ```
pub fn build_chain(atoms: &[Atom]) -> ParseResult<Expr> {
    validate_alternation(atoms)?;
    validate_length(atoms)?;
    let level = uniform_precedence(atoms)?;

    let mut iter = atoms.iter().enumerate().peekable();
    let tree = parse_additive(&mut iter)?;
    expect_end(&mut iter)?;

    debug!("built {level:?} chain {tree}");
    Ok(tree)
}

/// Ensures every atom has been consumed by the parser.
///
/// Operators are always consumed by one of the precedence levels, so any
/// leftover atom is a number directly following another number.
fn expect_end<'a, I>(atoms: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = (usize, &'a Atom)>
{
    match atoms.next() {
        Some((position, _)) => Err(ParseError::sequence(AtomFault::ConsecutiveNumbers, position)),
        None => Ok(()),
    }
}
