/// Entry points for tree construction.
///
/// Validates an atom list and hands it to the precedence parser, returning a
/// single expression tree.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels as left-associative chains, with
/// additive chains whose operands are multiplicative chains.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides the alternation and precedence checks run before parsing.
pub mod utils;
