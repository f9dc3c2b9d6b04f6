use crate::{
    error::{EvalResult, RuntimeError},
    interpreter::value::Value,
    rpn::{Op, Term},
};

/// Executes a postfix program on a value stack and returns the result.
///
/// Numbers push their value; `Negate` pops one operand and pushes its
/// negation; binary operators pop the right operand first, then the left.
/// Arithmetic runs in double precision throughout — the integer/real
/// presentation is decided once, on the final value, by
/// [`Value::from_evaluated`].
///
/// # Parameters
/// - `terms`: The program in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::converter::to_postfix).
///
/// # Returns
/// The single value the program reduces to.
///
/// # Errors
/// - `InsufficientOperands` if an operator finds too few stack values.
/// - `IntegerOperandRequired` if `//` or `%` meets a fractional operand.
/// - `DivisionByZero` if `/`, `//` or `%` meets a zero right operand.
/// - `MalformedExpression` if the stack does not end with exactly one
///   value, or the sequence contains a parenthesis.
///
/// # Example
/// ```
/// use shunta::interpreter::{converter::to_postfix, evaluator::evaluate_postfix, lexer::tokenize,
///                           value::Value};
///
/// let postfix = to_postfix(tokenize("10 / 4").unwrap()).unwrap();
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), Value::Real(2.5));
/// ```
pub fn evaluate_postfix(terms: &[Term]) -> EvalResult<Value> {
    let mut stack: Vec<f64> = Vec::with_capacity(terms.len());

    for term in terms {
        match term {
            Term::Number(value) => stack.push(*value),

            Term::Operator(Op::Negate) => {
                let operand =
                    stack.pop()
                         .ok_or(RuntimeError::InsufficientOperands { operator: Op::Negate })?;
                stack.push(-operand);
            },

            Term::Operator(op) => {
                let (right, left) = match (stack.pop(), stack.pop()) {
                    (Some(right), Some(left)) => (right, left),
                    _ => return Err(RuntimeError::InsufficientOperands { operator: *op }),
                };

                stack.push(apply_binary(*op, left, right)?);
            },

            // Parentheses never survive conversion; one here means the
            // sequence was not a postfix program.
            Term::LeftParen | Term::RightParen => return Err(RuntimeError::MalformedExpression),
        }
    }

    if stack.len() == 1 {
        Ok(Value::from_evaluated(stack[0]))
    } else {
        Err(RuntimeError::MalformedExpression)
    }
}

/// Applies a binary operator to two operands.
///
/// `//` and `%` demand operands that equal their own truncation and use
/// floored semantics, so the result's sign follows the divisor:
/// `1 // -2 = -1` and `-7 % 3 = 2`. Division, floored division and modulo
/// reject a zero right operand. Exponentiation follows IEEE `powf`.
fn apply_binary(op: Op, left: f64, right: f64) -> EvalResult<f64> {
    if matches!(op, Op::IntDiv | Op::Mod) && (left.fract() != 0.0 || right.fract() != 0.0) {
        return Err(RuntimeError::IntegerOperandRequired { operator: op });
    }

    if matches!(op, Op::Div | Op::IntDiv | Op::Mod) && right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }

    Ok(match op {
        Op::Add => left + right,
        Op::Sub => left - right,
        Op::Mul => left * right,
        Op::Div => left / right,
        Op::IntDiv => (left / right).floor(),
        Op::Mod => left - right * (left / right).floor(),
        Op::Pow => left.powf(right),
        Op::Negate => unreachable!(),
    })
}
