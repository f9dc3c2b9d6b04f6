/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// converting it to postfix order. Parse errors include empty input, unknown
/// lexemes, invalid sign sequences, and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the stack machine
/// executes a postfix program: missing operands, integer-only operators
/// applied to fractional values, division by zero, and programs that do not
/// reduce to a single value.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::{EvalResult, RuntimeError};

#[derive(Debug)]
/// Represents any failure of a full [`evaluate`](crate::evaluate) call.
///
/// Wraps the stage-specific error types so the public entry point returns a
/// single error type. The wrapped error is reachable through
/// [`std::error::Error::source`] as well as by matching on the variant.
pub enum EvalError {
    /// The expression could not be tokenized or converted to postfix order.
    Parse(ParseError),
    /// The postfix program failed during execution.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
