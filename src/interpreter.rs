/// The converter module reorders infix tokens into postfix order.
///
/// The converter consumes the tokenizer's output and applies the
/// shunting-yard algorithm: an operator stack driven by the precedence and
/// associativity table produces a postfix sequence that the evaluator can
/// execute directly.
///
/// # Responsibilities
/// - Reorders resolved infix tokens into postfix (reverse Polish) order.
/// - Applies operator precedence and associativity.
/// - Detects unbalanced parentheses.
pub mod converter;
/// The evaluator module executes postfix programs and computes results.
///
/// The evaluator runs a stack machine over the converter's output,
/// performing all arithmetic in double precision and deciding the final
/// integer/real presentation once, on the single remaining value.
///
/// # Responsibilities
/// - Executes postfix token sequences on a value stack.
/// - Enforces integer-only operand rules for `//` and `%`.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module tokenizes expression text.
///
/// The lexer (tokenizer) reads the raw text and produces a resolved token
/// sequence, skipping whitespace and classifying every `+`/`-` as unary or
/// binary. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, longest match first.
/// - Resolves unary signs: `-` becomes `Negate`, `+` is dropped.
/// - Reports lexical errors for empty, unknown or ill-signed input.
pub mod lexer;
/// The value module defines the result type of evaluation.
///
/// This module declares the `Value` enum returned by the evaluator, with
/// integer and real variants, and the presentation rule that picks between
/// them.
///
/// # Responsibilities
/// - Defines the `Value` enum and its display formatting.
/// - Applies the final integer/real presentation rule.
pub mod value;
