/// Number formatting helpers.
///
/// This module turns evaluation results back into text, both for display and
/// for re-seeding the input buffer after a successful evaluation.
pub mod num;
