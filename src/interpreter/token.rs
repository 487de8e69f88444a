use crate::{ast::BinaryOperator, util::num::format_number};

/// The two observable kinds of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Part of a number: a digit, a decimal point or a leading sign.
    Value,
    /// One of `+ - * /`.
    Operator,
}

/// One unit of calculator input, in the order it was entered.
///
/// Tokens are produced by the input layer and only read by the engine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// A decimal digit.
    Digit(char),
    /// The decimal point.
    Point,
    /// The leading `-` of a negative result carried into new input.
    Sign,
    /// An arithmetic operator.
    Operator(BinaryOperator),
}

impl Token {
    /// Returns whether the token belongs to a number or is an operator.
    #[must_use]
    pub const fn kind(self) -> TokenKind {
        match self {
            Self::Digit(_) | Self::Point | Self::Sign => TokenKind::Value,
            Self::Operator(_) => TokenKind::Operator,
        }
    }

    /// The character the token is written as.
    ///
    /// # Example
    /// ```
    /// use abacus::{ast::BinaryOperator, interpreter::token::Token};
    ///
    /// assert_eq!(Token::Digit('7').literal(), '7');
    /// assert_eq!(Token::Point.literal(), '.');
    /// assert_eq!(Token::Operator(BinaryOperator::Mul).literal(), '*');
    /// ```
    #[must_use]
    pub const fn literal(self) -> char {
        match self {
            Self::Digit(digit) => digit,
            Self::Point => '.',
            Self::Sign => '-',
            Self::Operator(op) => op.symbol(),
        }
    }

    /// Returns `true` for value-bearing tokens.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self.kind(), TokenKind::Value)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal())
    }
}

/// Re-seeds a token sequence from a result.
///
/// The value is written with [`format_number`] and every character becomes a
/// token, with a leading `-` becoming [`Token::Sign`]. Returns `None` for
/// values that have no decimal form (infinities and NaN).
///
/// # Example
/// ```
/// use abacus::interpreter::token::{Token, tokens_from_number};
///
/// assert_eq!(tokens_from_number(-1.5),
///            Some(vec![Token::Sign, Token::Digit('1'), Token::Point, Token::Digit('5')]));
/// assert_eq!(tokens_from_number(f64::INFINITY), None);
/// ```
#[must_use]
pub fn tokens_from_number(value: f64) -> Option<Vec<Token>> {
    if !value.is_finite() {
        return None;
    }

    format_number(value).chars()
                        .map(|c| match c {
                            '0'..='9' => Some(Token::Digit(c)),
                            '.' => Some(Token::Point),
                            '-' => Some(Token::Sign),
                            _ => None,
                        })
                        .collect()
}
