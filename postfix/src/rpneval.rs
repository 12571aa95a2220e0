use crate::context::MathContext;
use crate::errors::CalcError;
use crate::parser::{check_balance, PostfixExpr, ShuntingConverter};
use lexers::SpaceTokenizer;

// Fixed binary operator table, symbol to pure function. Division and
// modulo by zero yield inf/NaN like any other f64 arithmetic.
pub(crate) fn binary_op(op: &str) -> Option<fn(f64, f64) -> f64> {
    match op {
        "+" => Some(|a, b| a + b),
        "-" => Some(|a, b| a - b),
        "*" => Some(|a, b| a * b),
        "/" => Some(|a, b| a / b),
        "%" => Some(|a, b| a % b),
        "^" => Some(|a, b| a.powf(b)),
        _ => None,
    }
}

// Fixed unary table. 'sign' is 0 for both zeroes and NaN, where
// f64::signum would say 1.
pub(crate) fn unary_op(name: &str) -> Option<fn(f64) -> f64> {
    match name {
        "abs" => Some(f64::abs),
        "sqr" => Some(|x| x * x),
        "sign" => Some(|x| {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else {
                0.0
            }
        }),
        _ => None,
    }
}

impl MathContext {
    // Stack machine over postfix tokens. Binary operators pop b then a and
    // push a op b, so the first-pushed operand is the left one.
    pub fn eval(&self, rpn: &PostfixExpr) -> Result<f64, CalcError> {
        let mut operands = Vec::new();

        for token in rpn.0.iter() {
            if let Ok(num) = token.parse::<f64>() {
                operands.push(num);
            } else if let Some(func) = binary_op(token) {
                let b = operands
                    .pop()
                    .ok_or_else(|| CalcError::InsufficientOperands(token.clone()))?;
                let a = operands
                    .pop()
                    .ok_or_else(|| CalcError::InsufficientOperands(token.clone()))?;
                operands.push(func(a, b));
            } else if let Some(func) = unary_op(token) {
                let o = operands
                    .pop()
                    .ok_or_else(|| CalcError::InsufficientOperands(token.clone()))?;
                operands.push(func(o));
            } else if let Some(val) = self.getvar(token) {
                operands.push(val);
            } else {
                return Err(CalcError::InvalidToken(token.clone()));
            }
        }
        match operands.len() {
            1 => Ok(operands[0]),
            _ => Err(CalcError::MalformedExpression),
        }
    }

    // The full pipeline: balance guard, conversion, then evaluation of the
    // re-tokenized postfix text. Returns the postfix rendering alongside
    // the result so callers can show both.
    pub fn process(&self, expr: &str) -> Result<(String, f64), CalcError> {
        if !check_balance(expr) {
            return Err(CalcError::MismatchedParenthesis);
        }
        let rpn = ShuntingConverter::convert_str(expr, self)?;
        let postfix = rpn.to_string();
        let tokens = SpaceTokenizer::from_str(&postfix).collect();
        let result = self.eval(&PostfixExpr(tokens))?;
        Ok((postfix, result))
    }
}
