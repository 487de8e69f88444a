use log::trace;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{parser::core::ParseResult, token::Token},
};

/// A number or an operator, after consecutive value tokens have been joined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Atom {
    /// A complete numeric literal.
    Number(f64),
    /// An arithmetic operator.
    Operator(BinaryOperator),
}

impl Atom {
    /// Returns the operator if this atom is one.
    #[must_use]
    pub const fn as_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Operator(op) => Some(op),
            Self::Number(_) => None,
        }
    }

    /// Returns `true` for number atoms.
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Groups a token sequence into alternating number and operator atoms.
///
/// Tokens are scanned once, left to right. Value tokens are accumulated into
/// a literal; an operator closes the literal, which is parsed into a number
/// atom, and is then emitted itself. The trailing literal is closed at the
/// end. An empty literal is never emitted, so malformed operator placement is
/// left for the tree builder to report.
///
/// The function is pure: the same tokens always give the same atoms.
///
/// # Errors
/// Returns `InvalidLiteral` if a literal is not a decimal number, such as a
/// lone `.`.
///
/// # Example
/// ```
/// use abacus::{
///     ast::BinaryOperator,
///     interpreter::{
///         segmenter::{Atom, segment},
///         token::Token,
///     },
/// };
///
/// let tokens = [Token::Digit('1'),
///               Token::Digit('2'),
///               Token::Operator(BinaryOperator::Add),
///               Token::Point,
///               Token::Digit('5')];
///
/// assert_eq!(segment(&tokens).unwrap(),
///            vec![Atom::Number(12.0), Atom::Operator(BinaryOperator::Add), Atom::Number(0.5)]);
/// ```
pub fn segment(tokens: &[Token]) -> ParseResult<Vec<Atom>> {
    let mut atoms = Vec::new();
    let mut literal = String::new();
    let mut start = 0;

    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Operator(op) => {
                close_literal(&mut literal, start, &mut atoms)?;
                atoms.push(Atom::Operator(*op));
                start = index + 1;
            },
            value => literal.push(value.literal()),
        }
    }
    close_literal(&mut literal, start, &mut atoms)?;

    trace!("segmented {} tokens into {} atoms", tokens.len(), atoms.len());
    Ok(atoms)
}

/// Parses the accumulated literal, pushes it as a number atom and empties it.
fn close_literal(literal: &mut String, start: usize, atoms: &mut Vec<Atom>) -> ParseResult<()> {
    if literal.is_empty() {
        return Ok(());
    }

    let value = literal.parse::<f64>()
                       .map_err(|_| ParseError::InvalidLiteral { literal:  literal.clone(),
                                                                 position: start, })?;
    atoms.push(Atom::Number(value));
    literal.clear();

    Ok(())
}
