use shunta::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
    interpreter::value::Value,
    rpn::Op,
};

fn assert_integer(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(Value::Integer(n)) => {
            assert_eq!(n, expected, "{src} evaluated to {n}, expected {expected}");
        },
        Ok(Value::Real(r)) => {
            panic!("{src} evaluated to the real {r}, expected the integer {expected}")
        },
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_real(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(Value::Real(r)) => assert_eq!(r, expected, "{src} evaluated to {r}, expected {expected}"),
        Ok(Value::Integer(n)) => {
            panic!("{src} evaluated to the integer {n}, expected the real {expected}")
        },
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(EvalError::Parse(e)) => e,
        other => panic!("{src} was expected to fail with a parse error, got {other:?}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match evaluate(src) {
        Err(EvalError::Runtime(e)) => e,
        other => panic!("{src} was expected to fail with a runtime error, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic_and_precedence() {
    assert_integer("1 + 2 * 3", 7);
    assert_integer("(1 + 2) * 3", 9);
    assert_integer("8 - 5", 3);
    assert_integer("7 * 9", 63);
    assert_integer("10 / 2", 5);
    assert_integer("2 * (3 + 4) - 5", 9);
}

#[test]
fn power_is_right_associative() {
    assert_integer("2 ** 3 ** 2", 512);
    assert_integer("(2 ** 3) ** 2", 64);
    assert_real("2 ** -3", 0.125);
}

#[test]
fn unary_sign_resolution() {
    assert_integer("-5", -5);
    assert_integer("-2 ** 2", 4);
    assert_integer("(-2) ** 2", 4);
    assert_integer("2 * -5", -10);
    assert_integer("10 / +2", 5);
    assert_integer("+5 - 3", 2);
    assert_integer("2 + (-2)", 0);
    assert_integer("2 - (-2)", 4);
}

#[test]
fn integer_and_real_presentation() {
    assert_real("10 / 4", 2.5);
    assert_integer("5 / 1", 5);
    assert_integer("1.5 * 2", 3);
    assert_real("1.5 / 3", 0.5);
}

#[test]
fn floored_division_and_modulo() {
    assert_integer("10 // 3", 3);
    assert_integer("1 // -2", -1);
    assert_integer("10 % 3", 1);
    assert_integer("-7 % 3", 2);
    assert_integer("7 % -3", -2);
}

#[test]
fn integer_operators_reject_fractional_operands() {
    assert!(matches!(runtime_error("5.5 // 2"),
                     RuntimeError::IntegerOperandRequired { operator: Op::IntDiv }));
    assert!(matches!(runtime_error("5 // 2.5"),
                     RuntimeError::IntegerOperandRequired { operator: Op::IntDiv }));
    assert!(matches!(runtime_error("10 % 2.5"),
                     RuntimeError::IntegerOperandRequired { operator: Op::Mod }));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(runtime_error("10 / 0"), RuntimeError::DivisionByZero));
    assert!(matches!(runtime_error("10 // 0"), RuntimeError::DivisionByZero));
    assert!(matches!(runtime_error("10 % 0"), RuntimeError::DivisionByZero));
}

#[test]
fn chained_signs_are_rejected() {
    assert!(matches!(parse_error("2 - - 2"),
                     ParseError::ChainedUnaryOperator { operator: '-',
                                                        previous: '-' }));
    assert!(matches!(parse_error("- - 2"),
                     ParseError::ChainedUnaryOperator { operator: '-',
                                                        previous: '-' }));
    assert!(matches!(parse_error("2 + + 2"),
                     ParseError::ChainedUnaryOperator { operator: '+',
                                                        previous: '+' }));
    assert!(matches!(parse_error("2 + - 2"),
                     ParseError::ChainedUnaryOperator { operator: '-',
                                                        previous: '+' }));
    assert!(matches!(parse_error("2 - + 2"),
                     ParseError::ChainedUnaryOperator { operator: '+',
                                                        previous: '-' }));
}

#[test]
fn sign_runs_of_three_are_rejected() {
    assert!(matches!(parse_error("2 - - - 3"), ParseError::InvalidOperatorSequence));
    assert!(matches!(parse_error("2 + + - 3"), ParseError::InvalidOperatorSequence));
    assert!(matches!(parse_error("---1"), ParseError::InvalidOperatorSequence));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(parse_error("(1 + 2))"), ParseError::UnbalancedParentheses));
    assert!(matches!(parse_error("(1 + 2"), ParseError::UnbalancedParentheses));
    assert!(matches!(parse_error("1 + 2)"), ParseError::UnbalancedParentheses));
}

#[test]
fn degenerate_expressions_are_rejected() {
    assert!(matches!(runtime_error("()"), RuntimeError::MalformedExpression));
    assert!(matches!(runtime_error("1 2"), RuntimeError::MalformedExpression));
    assert!(matches!(runtime_error("1 + 2 +"),
                     RuntimeError::InsufficientOperands { operator: Op::Add }));
    assert!(matches!(runtime_error("*"),
                     RuntimeError::InsufficientOperands { operator: Op::Mul }));
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_error(""), ParseError::EmptyExpression));
    assert!(matches!(parse_error("   "), ParseError::EmptyExpression));
    assert!(matches!(parse_error("\t"), ParseError::EmptyExpression));
}

#[test]
fn unknown_tokens_are_rejected() {
    assert!(matches!(parse_error("1 $ 2"), ParseError::UnknownToken { .. }));
    assert!(matches!(parse_error("1 + # 2"), ParseError::UnknownToken { .. }));
    assert!(matches!(parse_error("1."), ParseError::UnknownToken { .. }));

    if let ParseError::UnknownToken { token } = parse_error("3 $ 4") {
        assert_eq!(token, "$");
    }
}

#[test]
fn whitespace_is_insignificant() {
    assert_integer(" 1+ 2 *3 ", 7);
    assert_integer("10\t/ 2", 5);
    assert_integer("2 **2", 4);
}

#[test]
fn evaluation_is_pure() {
    let first = evaluate("2 ** 10 - 24").unwrap();
    let second = evaluate("2 ** 10 - 24").unwrap();

    assert_eq!(first, second);
    assert_eq!(first, Value::Integer(1000));
}

#[test]
fn huge_integral_results_present_as_real() {
    assert!(matches!(evaluate("10 ** 30"), Ok(Value::Real(_))));
    assert!(matches!(evaluate("2 ** 200"), Ok(Value::Real(_))));
}

#[test]
fn results_format_like_their_variant() {
    assert_eq!(evaluate("10 / 4").unwrap().to_string(), "2.5");
    assert_eq!(evaluate("5 / 1").unwrap().to_string(), "5");
    assert_eq!(evaluate("2 * -5").unwrap().to_string(), "-10");
}
