//! Error types.

use crate::token::Token;

/// Any error raised while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected symbol {0:?}")]
    UnexpectedSymbol(char),

    #[error("integer literal out of range")]
    IntegerOverflow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("syntax error at offset {offset}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: Token,
        offset: usize,
    },

    #[error("syntax error at offset {offset}: parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: usize, offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,
}
