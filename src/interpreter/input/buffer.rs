use log::{error, trace, warn};

use crate::{
    ast::BinaryOperator,
    config::Config,
    error::CalcError,
    evaluate_tokens,
    interpreter::{
        lexer::{Key, lex_keys},
        parser::core::ParseResult,
        token::{Token, tokens_from_number},
    },
};

/// What the buffer currently shows besides its tokens.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Status {
    /// Normal editing; the display shows the tokens.
    Editing,
    /// The last evaluation divided by zero. The next key starts over.
    DivisionByZero,
    /// The last evaluation produced a value with no decimal form, such as
    /// an infinity after overflow. The next key starts over.
    NonFinite(f64),
}

/// The token sequence of an interactive calculator.
///
/// Every edit goes through the normalization policy, so the tokens always
/// segment into a well-formed atom list once a trailing operator is dropped.
/// Evaluation runs the engine on a snapshot of the tokens and, on success,
/// replaces them with the tokens of the result so the user can keep
/// calculating with it. The tokens of a carried result do not count towards
/// the length cap.
///
/// # Example
/// ```
/// use abacus::{config::Config, interpreter::input::buffer::InputBuffer};
///
/// let mut buffer = InputBuffer::new(Config::default());
/// buffer.replay("2+3*4=").unwrap();
/// assert_eq!(buffer.to_string(), "14");
///
/// buffer.replay("-20=").unwrap();
/// assert_eq!(buffer.to_string(), "-6");
/// ```
#[derive(Debug, Clone)]
pub struct InputBuffer {
    tokens:  Vec<Token>,
    /// Length of the carried result at the front of `tokens`.
    carried: usize,
    status:  Status,
    config:  Config,
}

impl InputBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { tokens:  Vec::new(),
               carried: 0,
               status:  Status::Editing,
               config }
    }

    /// The current tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// The settings the buffer was created with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Appends a token, applying the normalization policy.
    ///
    /// - A digit typed while the current number is exactly `0` replaces the
    ///   zero.
    /// - A second decimal point in one number is ignored.
    /// - A point that starts a number gets a `0` in front of it.
    /// - An operator right after a point completes the number with `0`.
    /// - An operator on an empty buffer gets a `0` in front of it.
    /// - An operator right after an operator replaces it.
    /// - An edit that would grow the typed part of the buffer past the
    ///   configured maximum is rejected. A carried result is not part of it.
    ///
    /// Signs are never appended; they only come from carried results.
    ///
    /// Returns `false` if the token was ignored or rejected, in which case
    /// the tokens are unchanged.
    pub fn append(&mut self, token: Token) -> bool {
        self.settle();

        let previous_len = self.tokens.len();
        let snapshot = (self.tokens.clone(), self.carried);
        let applied = match token {
            Token::Digit(digit) => self.push_digit(digit),
            Token::Point => self.push_point(),
            Token::Operator(op) => self.push_operator(op),
            Token::Sign => false,
        };

        if applied
           && self.tokens.len() > previous_len
           && self.typed_len() > self.config.max_input_len
        {
            warn!("input is full ({} tokens), rejected '{token}'", self.config.max_input_len);
            (self.tokens, self.carried) = snapshot;
            return false;
        }

        trace!("append '{token}' -> {applied}, input is now '{}'", self);
        applied
    }

    /// Removes the last token.
    ///
    /// A sign left on its own is removed as well. After an error or a
    /// non-finite result, the buffer is cleared instead.
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn delete_last(&mut self) -> bool {
        if self.status != Status::Editing {
            self.clear();
            return true;
        }

        let removed = self.pop().is_some();
        if self.tokens.last() == Some(&Token::Sign) {
            self.pop();
        }

        trace!("delete last -> {removed}, input is now '{}'", self);
        removed
    }

    /// Removes all tokens and resets the status.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.carried = 0;
        self.status = Status::Editing;
        trace!("cleared input");
    }

    /// Evaluates the current tokens.
    ///
    /// A trailing operator is left out of the evaluation. On success the
    /// tokens are replaced by the tokens of the result. A non-finite result
    /// empties the buffer and is shown until the next key.
    ///
    /// Returns `Ok(None)` if there is nothing to evaluate.
    ///
    /// # Errors
    /// - `DivisionByZero`: the buffer is emptied and shows the error text
    ///   until the next key.
    /// - Any parse error: the tokens could not be turned into an expression.
    ///   The policy rules this out; the buffer is left as it was.
    pub fn evaluate(&mut self) -> Result<Option<f64>, CalcError> {
        if self.status != Status::Editing || self.tokens.is_empty() {
            return Ok(None);
        }

        let snapshot = match self.tokens.as_slice() {
            [rest @ .., Token::Operator(_)] => rest,
            all => all,
        };

        match evaluate_tokens(snapshot) {
            Ok(value) => {
                self.carry(value);
                Ok(Some(value))
            },
            Err(e @ CalcError::Runtime(_)) => {
                warn!("evaluating '{}' failed: {e}", self);
                self.tokens.clear();
                self.carried = 0;
                self.status = Status::DivisionByZero;
                Err(e)
            },
            Err(e @ CalcError::Parse(_)) => {
                error!("input '{}' could not be parsed: {e}", self);
                Err(e)
            },
        }
    }

    /// Applies a single key press.
    ///
    /// # Errors
    /// Propagates errors from [`InputBuffer::evaluate`] when `key` is
    /// `Key::Equals`.
    pub fn press(&mut self, key: Key) -> Result<(), CalcError> {
        match key {
            Key::Equals => self.evaluate().map(|_| ()),
            Key::Clear => {
                self.clear();
                Ok(())
            },
            Key::Backspace => {
                self.delete_last();
                Ok(())
            },
            other => {
                if let Some(token) = other.as_token() {
                    self.append(token);
                }
                Ok(())
            },
        }
    }

    /// Presses every key in `source`, in order.
    ///
    /// A division by zero does not stop the replay; it shows up in the
    /// status and the display like it would for a user.
    ///
    /// # Errors
    /// - `UnexpectedKey` if `source` contains text that is not a key. No key
    ///   is pressed in that case.
    /// - Any other parse error raised while evaluating.
    pub fn replay(&mut self, source: &str) -> ParseResult<()> {
        for (key, _) in lex_keys(source)? {
            match self.press(key) {
                Ok(()) | Err(CalcError::Runtime(_)) => {},
                Err(CalcError::Parse(e)) => return Err(e),
            }
        }
        Ok(())
    }

    /// Tokens after the last operator.
    fn current_number(&self) -> &[Token] {
        let start = self.tokens.iter().rposition(|token| !token.is_value()).map_or(0, |i| i + 1);
        &self.tokens[start..]
    }

    /// Number of tokens typed after the carried result.
    fn typed_len(&self) -> usize {
        self.tokens.len() - self.carried
    }

    fn pop(&mut self) -> Option<Token> {
        let token = self.tokens.pop();
        self.carried = self.carried.min(self.tokens.len());
        token
    }

    /// Starts over if the buffer is showing an error or a non-finite result.
    fn settle(&mut self) {
        if self.status != Status::Editing {
            self.clear();
        }
    }

    fn push_digit(&mut self, digit: char) -> bool {
        if matches!(self.current_number(),
                    [Token::Digit('0')] | [Token::Sign, Token::Digit('0')])
        {
            if digit == '0' {
                return false;
            }
            self.pop();
        }
        self.tokens.push(Token::Digit(digit));
        true
    }

    fn push_point(&mut self) -> bool {
        let number = self.current_number();
        if number.contains(&Token::Point) {
            return false;
        }
        if !number.iter().any(|token| matches!(token, Token::Digit(_))) {
            self.tokens.push(Token::Digit('0'));
        }
        self.tokens.push(Token::Point);
        true
    }

    fn push_operator(&mut self, op: BinaryOperator) -> bool {
        match self.tokens.last() {
            None | Some(Token::Point) => self.tokens.push(Token::Digit('0')),
            Some(Token::Operator(_)) => {
                self.pop();
            },
            Some(Token::Sign) => return false,
            Some(Token::Digit(_)) => {},
        }
        self.tokens.push(Token::Operator(op));
        true
    }

    /// Replaces the tokens with those of an evaluation result.
    fn carry(&mut self, value: f64) {
        if let Some(tokens) = tokens_from_number(value) {
            self.carried = tokens.len();
            self.tokens = tokens;
            self.status = Status::Editing;
        } else {
            self.tokens.clear();
            self.carried = 0;
            self.status = Status::NonFinite(value);
        }
    }
}
