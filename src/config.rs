/// Default cap on the number of tokens the input buffer accepts.
pub const DEFAULT_MAX_INPUT_LEN: usize = 20;
/// Default text shown after a division by zero.
pub const DEFAULT_ERROR_TEXT: &str = "Error";

/// Settings of an [`InputBuffer`](crate::interpreter::input::buffer::InputBuffer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Appends that would grow the typed input past this many tokens are
    /// rejected. A carried result does not count.
    pub max_input_len: usize,
    /// Shown in place of a result after a division by zero.
    pub error_text:    String,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_input_len: DEFAULT_MAX_INPUT_LEN,
               error_text:    DEFAULT_ERROR_TEXT.to_string(), }
    }
}
