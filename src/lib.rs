//! # abacus
//!
//! abacus is the engine of a keypad calculator written in Rust.
//! It turns digits, decimal points and the four basic operators into a
//! result, honoring operator precedence and left-to-right grouping, and
//! reports a division by zero as an error value instead of a number.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    error::CalcError,
    interpreter::{
        evaluator::core::evaluate, lexer::lex_tokens, parser::core::build_tree,
        segmenter::segment, token::Token,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the operator set and the `Expr` tree that the parser
/// builds and the evaluator reduces.
///
/// # Responsibilities
/// - Defines the four arithmetic operators and their precedence levels.
/// - Defines the binary expression tree, with atom positions for error
///   reporting.
pub mod ast;
/// Settings for the interactive input buffer.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing keys,
/// segmenting tokens, building trees, or evaluating them.
///
/// # Responsibilities
/// - Defines error enums for contract violations and for division by zero.
/// - Attaches positions for context.
/// - Combines both under one error type for the full pipeline.
pub mod error;
/// Orchestrates the calculator pipeline.
///
/// This module ties together key lexing, segmenting, tree construction,
/// evaluation and the interactive input buffer.
///
/// # Responsibilities
/// - Coordinates the stages from key presses to a result.
/// - Provides the stateless engine operations and the stateful input layer.
pub mod interpreter;
/// General utilities for numbers.
///
/// # Responsibilities
/// - Format results for display and for chaining into new input.
pub mod util;

/// Runs the engine on a token sequence.
///
/// The tokens are segmented into atoms, the atoms are built into a tree, and
/// the tree is evaluated. No input policy is applied and nothing is kept
/// between calls.
///
/// # Errors
/// - A parse error if the tokens do not form a well-formed expression.
/// - `DivisionByZero` if the expression divides by zero.
///
/// # Examples
/// ```
/// use abacus::{ast::BinaryOperator, evaluate_tokens, interpreter::token::Token};
///
/// let tokens = [Token::Digit('8'),
///               Token::Operator(BinaryOperator::Sub),
///               Token::Digit('3'),
///               Token::Operator(BinaryOperator::Sub),
///               Token::Digit('2')];
///
/// assert_eq!(evaluate_tokens(&tokens), Ok(3.0));
/// ```
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, CalcError> {
    let atoms = segment(tokens)?;
    let tree = build_tree(&atoms)?;
    let value = evaluate(&tree)?;

    debug!("{} tokens evaluated to {value}", tokens.len());
    Ok(value)
}

/// Returns the result of an expression written as text.
///
/// The text may only contain digits, decimal points, the operators
/// `+ - * /` (also `x`, `×`, `÷`) and whitespace.
///
/// # Errors
/// Returns an error if the text contains anything else, if the expression
/// is malformed, or if it divides by zero.
///
/// # Examples
/// ```
/// use abacus::calculate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(calculate("2 + 3 * 4").unwrap(), 14.0);
///
/// // Division by zero is an error value, wherever it happens.
/// let err = calculate("3 + 5 / 0").unwrap_err();
/// assert!(err.is_division_by_zero());
/// ```
pub fn calculate(source: &str) -> Result<f64, CalcError> {
    let tokens = lex_tokens(source)?;
    evaluate_tokens(&tokens)
}
