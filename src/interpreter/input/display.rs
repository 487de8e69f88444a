use crate::{
    interpreter::{
        input::buffer::{InputBuffer, Status},
        token::Token,
    },
    util::num::format_number,
};

/// Writes tokens as the text a user typed.
///
/// # Example
/// ```
/// use abacus::{
///     ast::BinaryOperator,
///     interpreter::{input::display::render_tokens, token::Token},
/// };
///
/// let tokens = [Token::Digit('4'), Token::Operator(BinaryOperator::Div), Token::Digit('2')];
/// assert_eq!(render_tokens(&tokens), "4/2");
/// ```
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.literal()).collect()
}

/// Shows what a calculator display would: the error text after a division
/// by zero, a non-finite result until the next key, `0` when empty, and the
/// typed tokens otherwise.
impl std::fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status() {
            Status::DivisionByZero => write!(f, "{}", self.config().error_text),
            Status::NonFinite(value) => write!(f, "{}", format_number(value)),
            Status::Editing if self.is_empty() => write!(f, "0"),
            Status::Editing => write!(f, "{}", render_tokens(self.tokens())),
        }
    }
}
