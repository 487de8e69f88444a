/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator walks the tree bottom-up, applies the four arithmetic
/// operators and reports a division by zero as an error value that reaches
/// the root of the tree.
///
/// # Responsibilities
/// - Evaluates operands before their operator.
/// - Propagates the first error unchanged through every enclosing operation.
/// - Follows IEEE 754 semantics for everything else, overflow included.
pub mod evaluator;
/// The input module plays the part of the calculator's keypad memory.
///
/// It keeps the token sequence the user is building, normalizes every edit,
/// and chains results into new input.
///
/// # Responsibilities
/// - Appends, deletes and clears tokens under the input policy.
/// - Evaluates a snapshot of the tokens through the engine.
/// - Renders the display text.
pub mod input;
/// The lexer module turns raw text into key presses.
///
/// # Responsibilities
/// - Recognizes digits, the decimal point, operators and command keys.
/// - Reports the position of any text that is not a key.
pub mod lexer;
/// The parser module builds expression trees from atoms.
///
/// The parser checks that atoms alternate between numbers and operators and
/// then builds a tree in which `*` and `/` bind tighter than `+` and `-`, and
/// operators of equal precedence group from the left.
///
/// # Responsibilities
/// - Rejects malformed atom lists with the position of the first fault.
/// - Builds trees for full expressions and for single-precedence chains.
pub mod parser;
/// The segmenter module groups tokens into numbers and operators.
pub mod segmenter;
/// The token module defines the units of calculator input.
pub mod token;
