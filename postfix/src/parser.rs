use crate::context::MathContext;
use crate::errors::CalcError;
use crate::rpneval::{binary_op, unary_op};
use lexers::SpaceTokenizer;
use std::fmt;

// Precedence ranks, higher binds tighter. '(' sits at the bottom so it is
// never popped by comparison, only by the explicit ')' handling. Every key
// of the operator tables in rpneval must rank here.
pub(crate) fn precedence(token: &str) -> Option<u32> {
    match token {
        "(" => Some(0),
        "+" | "-" => Some(1),
        "*" | "/" | "%" => Some(2),
        "^" => Some(3),
        "abs" | "sqr" | "sign" => Some(4),
        _ => None,
    }
}

fn is_operator(token: &str) -> bool {
    binary_op(token).is_some() || unary_op(token).is_some()
}

// Coarse pre-pass guard: counts parens over raw characters, so a paren
// stuck inside a longer token still counts. Reordered-but-balanced input
// like ") (" passes here and is left to the converter.
pub fn check_balance(expr: &str) -> bool {
    let open = expr.chars().filter(|ch| *ch == '(').count();
    let close = expr.chars().filter(|ch| *ch == ')').count();
    open == close
}

#[derive(Debug, PartialEq)]
pub struct PostfixExpr(pub Vec<String>);

impl fmt::Display for PostfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

pub struct ShuntingConverter;

impl ShuntingConverter {
    pub fn convert_str(expr: &str, cx: &MathContext) -> Result<PostfixExpr, CalcError> {
        Self::convert(SpaceTokenizer::from_str(expr), cx)
    }

    // Shunting-yard on textual tokens, precedence only: an equal-rank stack
    // top pops before the incoming operator, which makes every operator
    // left associative, '^' included.
    pub fn convert(
        lex: impl Iterator<Item = String>,
        cx: &MathContext,
    ) -> Result<PostfixExpr, CalcError> {
        let mut out = Vec::new();
        let mut stack: Vec<String> = Vec::new();

        for token in lex {
            if token.parse::<f64>().is_ok() {
                out.push(token);
            } else if is_operator(&token) {
                let prec = precedence(&token).unwrap_or(0);
                while !stack.is_empty() {
                    if precedence(stack.last().unwrap()).unwrap_or(0) < prec {
                        break;
                    }
                    out.push(stack.pop().unwrap());
                }
                stack.push(token);
            } else if token == "(" {
                stack.push(token);
            } else if token == ")" {
                loop {
                    match stack.pop() {
                        Some(top) if top == "(" => break,
                        Some(top) => out.push(top),
                        None => return Err(CalcError::MismatchedParenthesis),
                    }
                }
            } else if let Some(val) = cx.getvar(&token) {
                out.push(val.to_string());
            } else {
                return Err(CalcError::InvalidToken(token));
            }
        }
        // Drain whatever is left, stray '(' included: the evaluator rejects
        // it downstream, the converter is not a structural validator.
        while let Some(top) = stack.pop() {
            out.push(top);
        }
        Ok(PostfixExpr(out))
    }
}
