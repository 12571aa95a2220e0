use thiserror::Error;

// Every failure is terminal for the current call; the shell around the
// core decides how to present it.
#[derive(Debug, PartialEq, Error)]
pub enum CalcError {
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("insufficient operands for '{0}'")]
    InsufficientOperands(String),
    #[error("malformed expression")]
    MalformedExpression,
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,
}
