//! flatcalc evaluates one line of arithmetic over non-negative integers and
//! the binary operators `+ - * /`.
//!
//! The pipeline has two stages: a [`lexer::Lexer`] turns the line into
//! tokens, and an [`eval::Evaluator`] pulls those tokens and folds them into
//! a running value. The grammar is a flat left-associative chain, so all
//! four operators are applied strictly left to right with no precedence
//! between them.
//!
//! Reading lines and printing results is the caller's job; the crate itself
//! is a pure function from one line of text to one result or error.

extern crate num_bigint;
extern crate num_rational;
extern crate num_traits;

pub mod eval;
pub mod lexer;
mod result;

pub use crate::eval::{EvalError, Evaluator};
pub use crate::result::EvalResult;

use crate::lexer::Lexer;

/// Evaluates a single line of text.
///
/// Each call builds a fresh lexer and evaluator, so independent lines can be
/// evaluated concurrently from different callers.
pub fn eval_line(expr: &str) -> Result<EvalResult, EvalError> {
    Evaluator::new(Lexer::new(expr)).eval()
}
