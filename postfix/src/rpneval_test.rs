use crate::context::MathContext;
use crate::errors::CalcError;
use crate::parser::PostfixExpr;
use lexers::SpaceTokenizer;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10)
    };
}

fn eval_str(postfix: &str) -> Result<f64, CalcError> {
    let rpn = PostfixExpr(SpaceTokenizer::from_str(postfix).collect());
    MathContext::new().eval(&rpn)
}

#[test]
fn test_eval_binary_ops() {
    fuzzy_eq!(eval_str("3 5 + 2 *").unwrap(), 16.0);
    fuzzy_eq!(eval_str("8 3 - 2 -").unwrap(), 3.0);
    fuzzy_eq!(eval_str("7 2 /").unwrap(), 3.5);
    fuzzy_eq!(eval_str("11 2 %").unwrap(), 1.0);
    fuzzy_eq!(eval_str("2 10 ^").unwrap(), 1024.0);
}

#[test]
fn test_eval_unary_ops() {
    fuzzy_eq!(eval_str("2 sqr").unwrap(), 4.0);
    fuzzy_eq!(eval_str("-10 abs").unwrap(), 10.0);
    fuzzy_eq!(eval_str("-7 sign").unwrap(), -1.0);
    fuzzy_eq!(eval_str("0 sign").unwrap(), 0.0);
    fuzzy_eq!(eval_str("42 sign").unwrap(), 1.0);
}

#[test]
fn test_pop_order_left_operand_pushed_first() {
    fuzzy_eq!(eval_str("10 4 -").unwrap(), 6.0);
    fuzzy_eq!(eval_str("2 3 ^").unwrap(), 8.0);
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    assert!(eval_str("1 0 /").unwrap().is_infinite());
    assert!(eval_str("1 0 %").unwrap().is_nan());
}

#[test]
fn test_underflow_names_operator() {
    assert_eq!(
        eval_str("5 +"),
        Err(CalcError::InsufficientOperands("+".to_string()))
    );
    assert_eq!(
        eval_str("abs"),
        Err(CalcError::InsufficientOperands("abs".to_string()))
    );
}

#[test]
fn test_residue_is_malformed() {
    assert_eq!(eval_str("3 5"), Err(CalcError::MalformedExpression));
    assert_eq!(eval_str(""), Err(CalcError::MalformedExpression));
}

#[test]
fn test_unknown_postfix_token() {
    assert_eq!(
        eval_str("3 4 bogus"),
        Err(CalcError::InvalidToken("bogus".to_string()))
    );
}

#[test]
fn test_variables_resolve_at_eval_time() {
    let mut cx = MathContext::new();
    cx.setvar("x", 2.5);
    let rpn = PostfixExpr(vec!["x".to_string(), "2".to_string(), "*".to_string()]);
    fuzzy_eq!(cx.eval(&rpn).unwrap(), 5.0);
}

#[test]
fn test_process_round_trip() {
    let cx = MathContext::new();
    let (postfix, result) = cx.process("( 3 + 5 ) * 2").unwrap();
    assert_eq!(postfix, "3 5 + 2 *");
    fuzzy_eq!(result, 16.0);
}

#[test]
fn test_process_mixed_expression() {
    let cx = MathContext::new();
    let (postfix, result) = cx
        .process("( 3 + 5 ) * sqr ( 2 ) - abs ( -10 ) + 11 % 2")
        .unwrap();
    assert_eq!(postfix, "3 5 + 2 sqr * -10 abs - 11 2 % +");
    fuzzy_eq!(result, 23.0);
}

#[test]
fn test_exponentiation_left_associative() {
    let cx = MathContext::new();
    let (_, result) = cx.process("2 ^ 3 ^ 2").unwrap();
    fuzzy_eq!(result, 64.0);
}

#[test]
fn test_process_repeats_identically() {
    let cx = MathContext::new();
    let first = cx.process("( 3 + 5 ) * 2").unwrap();
    let second = cx.process("( 3 + 5 ) * 2").unwrap();
    assert_eq!(first.0, second.0);
    fuzzy_eq!(first.1, second.1);
}

#[test]
fn test_process_rejects_unbalanced() {
    let cx = MathContext::new();
    assert_eq!(cx.process("( 3 + 5"), Err(CalcError::MismatchedParenthesis));
    assert_eq!(cx.process("3 + 5 )"), Err(CalcError::MismatchedParenthesis));
}
