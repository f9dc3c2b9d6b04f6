//! # shunta
//!
//! shunta is a single-shot arithmetic expression evaluator written in Rust.
//! It tokenizes an infix expression, reorders it into postfix form with the
//! shunting-yard algorithm, and executes it on a stack machine, returning
//! an integer or floating-point result.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{converter::to_postfix, evaluator::evaluate_postfix, lexer::tokenize,
                  value::Value},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// converting, or executing an expression. It standardizes error reporting
/// and carries the offending token or operator where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter,
///   evaluator).
/// - Wraps both stages into the single `EvalError` returned by
///   [`evaluate`].
pub mod error;
/// Orchestrates the three stages of expression evaluation.
///
/// This module ties together the lexer, the infix-to-postfix converter,
/// the stack-machine evaluator and the result value type. Each stage
/// consumes the previous stage's output; no state survives a call.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, converter, evaluator, and the
///   value type.
/// - Manages the flow of data and errors between stages.
pub mod interpreter;
/// Defines the token vocabulary shared by the converter and evaluator.
///
/// This module declares the `Op` and `Term` types that represent a
/// resolved expression as a flat token sequence, in infix order out of the
/// tokenizer and in postfix order out of the converter.
///
/// # Responsibilities
/// - Defines operator kinds with their precedence and associativity.
/// - Defines the sequence element type used by both orders.
pub mod rpn;
/// General utilities for safe numeric conversion.
///
/// This module provides the checked conversions used when presenting the
/// final result.
///
/// # Responsibilities
/// - Safely convert `f64` to `i64` without silent data loss.
pub mod util;

/// Evaluates an infix arithmetic expression and returns its value.
///
/// This is the single public entry point of the core. The expression may
/// use the binary operators `+ - * / // % **`, unary `+`/`-`, decimal
/// number literals and parentheses. Whitespace is ignored. The result is
/// presented as an integer whenever the final value has no fractional
/// part, and as a floating-point value otherwise.
///
/// `evaluate` is a pure function of its input: it keeps no state between
/// calls, so repeated evaluation of the same text always yields the same
/// result and concurrent callers need no coordination.
///
/// # Errors
/// Returns an [`EvalError`] describing the first failure encountered by
/// the tokenizer, the converter or the evaluator. Every failure is
/// terminal; no stage attempts recovery.
///
/// # Examples
/// ```
/// use shunta::{evaluate, interpreter::value::Value};
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), Value::Integer(7));
///
/// // True division presents fractional results as floating-point.
/// assert_eq!(evaluate("10 / 4").unwrap(), Value::Real(2.5));
///
/// // Mismatched parentheses are reported, not panicked on.
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<Value, EvalError> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(tokens)?;

    Ok(evaluate_postfix(&postfix)?)
}
