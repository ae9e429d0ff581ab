//! Integer arithmetic expression evaluator.
//!
//! Input text is lexed on demand, parsed into an [`ast::Expr`] by a
//! recursive-descent parser and then reduced to a single `i64`.

pub mod ast;
pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

pub use crate::error::Error;

/// Evaluates `source` as one arithmetic expression.
///
/// ```
/// assert_eq!(intcalc::eval("(561 - 5 * (52 + 59)) * (28 - 21)"), Ok(42));
/// ```
pub fn eval(source: &str) -> Result<i64, Error> {
    let expr = parser::parse(source)?;
    Ok(eval::evaluate(&expr)?)
}
