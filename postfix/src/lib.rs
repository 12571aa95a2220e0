mod context;
mod errors;
mod parser;
mod rpneval;

pub use context::MathContext;
pub use errors::CalcError;
pub use parser::check_balance;
pub use parser::PostfixExpr;
pub use parser::ShuntingConverter;

#[cfg(test)]
mod rpneval_test;
