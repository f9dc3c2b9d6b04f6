use crate::rpn::Op;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

#[derive(Debug)]
/// Represents all errors that can occur while executing a postfix program.
pub enum RuntimeError {
    /// An operator was applied with too few values on the stack.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: Op,
    },
    /// `//` or `%` was applied to an operand with a fractional part.
    IntegerOperandRequired {
        /// The operator that rejected its operands.
        operator: Op,
    },
    /// Attempted division or modulo with a zero right operand.
    DivisionByZero,
    /// The program did not reduce to exactly one value.
    MalformedExpression,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { operator } => {
                write!(f, "Not enough operands for operator '{operator}'.")
            },

            Self::IntegerOperandRequired { operator } => write!(f,
                                                                "Operator '{operator}' requires integer operands."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::MalformedExpression => write!(f, "Malformed expression."),
        }
    }
}

impl std::error::Error for RuntimeError {}
