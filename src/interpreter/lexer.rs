use logos::Logos;

use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{parser::core::ParseResult, token::Token},
};

/// A single calculator key press.
///
/// Keys are what a keypad or keyboard produces. Value and operator keys map
/// onto [`Token`]s; the command keys (`=`, clear, backspace) drive the input
/// buffer and never reach the engine.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Key {
    /// A decimal digit, `0` to `9`.
    #[regex(r"[0-9]", parse_digit)]
    Digit(char),
    /// `.`
    #[token(".")]
    Point,
    /// `+`, `-`, `*` (or `x`, `×`), `/` (or `÷`).
    #[token("+", |_| BinaryOperator::Add)]
    #[token("-", |_| BinaryOperator::Sub)]
    #[token("*", |_| BinaryOperator::Mul)]
    #[token("x", |_| BinaryOperator::Mul)]
    #[token("×", |_| BinaryOperator::Mul)]
    #[token("/", |_| BinaryOperator::Div)]
    #[token("÷", |_| BinaryOperator::Div)]
    Operator(BinaryOperator),
    /// `=`
    #[token("=")]
    Equals,
    /// `c` or `C`
    #[token("c")]
    #[token("C")]
    Clear,
    /// `<`
    #[token("<")]
    Backspace,
}

impl Key {
    /// Returns the token a value or operator key stands for.
    ///
    /// Command keys have no token and return `None`.
    ///
    /// # Example
    /// ```
    /// use abacus::{
    ///     ast::BinaryOperator,
    ///     interpreter::{lexer::Key, token::Token},
    /// };
    ///
    /// assert_eq!(Key::Digit('7').as_token(), Some(Token::Digit('7')));
    /// assert_eq!(Key::Operator(BinaryOperator::Div).as_token(),
    ///            Some(Token::Operator(BinaryOperator::Div)));
    /// assert_eq!(Key::Equals.as_token(), None);
    /// ```
    #[must_use]
    pub const fn as_token(self) -> Option<Token> {
        match self {
            Self::Digit(digit) => Some(Token::Digit(digit)),
            Self::Point => Some(Token::Point),
            Self::Operator(op) => Some(Token::Operator(op)),
            Self::Equals | Self::Clear | Self::Backspace => None,
        }
    }
}

/// Splits source text into keys, paired with the byte offset of each key.
///
/// # Errors
/// Returns `UnexpectedKey` for the first piece of text that is not a key.
///
/// # Example
/// ```
/// use abacus::interpreter::lexer::{Key, lex_keys};
///
/// let keys = lex_keys("1 + 2=").unwrap();
/// assert_eq!(keys.len(), 4);
/// assert_eq!(keys[3], (Key::Equals, 5));
///
/// assert!(lex_keys("2^3").is_err());
/// ```
pub fn lex_keys(source: &str) -> ParseResult<Vec<(Key, usize)>> {
    let mut keys = Vec::new();
    let mut lexer = Key::lexer(source);

    while let Some(key) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(key) = key {
            keys.push((key, position));
        } else {
            return Err(ParseError::UnexpectedKey { key: lexer.slice().to_string(),
                                                   position });
        }
    }

    Ok(keys)
}

/// Splits source text into expression tokens.
///
/// Only digits, points and operators are accepted; command keys are rejected
/// like any other unexpected text.
///
/// # Errors
/// Returns `UnexpectedKey` for text that is not a key or for a command key.
pub fn lex_tokens(source: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = Key::lexer(source);

    while let Some(key) = lexer.next() {
        match key.ok().and_then(Key::as_token) {
            Some(token) => tokens.push(token),
            None => {
                return Err(ParseError::UnexpectedKey { key:      lexer.slice().to_string(),
                                                       position: lexer.span().start, });
            },
        }
    }

    Ok(tokens)
}

/// Parses a single digit from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(char)`: The digit character.
/// - `None`: If the slice is empty.
fn parse_digit(lex: &logos::Lexer<Key>) -> Option<char> {
    lex.slice().chars().next()
}
