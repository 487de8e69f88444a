/// The evolving input of an interactive calculator.
///
/// Owns the token sequence, applies the normalization policy to every edit,
/// and runs the engine on a snapshot when asked to evaluate.
pub mod buffer;

/// Rendering of the buffer as display text.
pub mod display;
