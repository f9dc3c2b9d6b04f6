use crate::{
    error::{ParseError, ParseResult},
    rpn::Term,
};

/// Reorders a resolved infix token sequence into postfix order.
///
/// This is the shunting-yard algorithm: numbers go straight to the output,
/// operators wait on a stack until an operator with lower binding strength
/// arrives, and parentheses delimit stack regions. Equal precedence pops
/// the stack for left-associative operators only, which makes `**`
/// right-associative: `2 ** 3 ** 2` converts as `2 ** (3 ** 2)`.
///
/// # Parameters
/// - `terms`: The token sequence in infix order.
///
/// # Returns
/// The same tokens in postfix order, with all parentheses consumed.
///
/// # Errors
/// - `UnbalancedParentheses` if a `)` finds no matching `(` on the stack,
///   or a `(` is still on the stack after all input is consumed.
///
/// # Example
/// ```
/// use shunta::{
///     interpreter::{converter::to_postfix, lexer::tokenize},
///     rpn::{Op, Term},
/// };
///
/// let postfix = to_postfix(tokenize("1 + 2 * 3").unwrap()).unwrap();
/// assert_eq!(postfix,
///            vec![Term::Number(1.0),
///                 Term::Number(2.0),
///                 Term::Number(3.0),
///                 Term::Operator(Op::Mul),
///                 Term::Operator(Op::Add)]);
/// ```
pub fn to_postfix(terms: Vec<Term>) -> ParseResult<Vec<Term>> {
    let mut output = Vec::with_capacity(terms.len());
    let mut stack: Vec<Term> = Vec::new();

    for term in terms {
        match term {
            Term::Number(_) => output.push(term),

            Term::LeftParen => stack.push(term),

            Term::RightParen => loop {
                match stack.pop() {
                    Some(Term::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::UnbalancedParentheses),
                }
            },

            Term::Operator(op) => {
                while let Some(&Term::Operator(top)) = stack.last() {
                    let pops = top.precedence() > op.precedence()
                               || (top.precedence() == op.precedence()
                                   && !top.is_right_associative());
                    if !pops {
                        break;
                    }

                    output.push(Term::Operator(top));
                    stack.pop();
                }

                stack.push(term);
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Term::LeftParen) {
            return Err(ParseError::UnbalancedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}
