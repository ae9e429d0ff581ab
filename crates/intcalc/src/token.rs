//! Token types.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    Integer(i64),
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
    EndOfInput,
}

impl Token {
    /// Whether this token is an additive operator (`+` or `-`).
    pub fn is_additive(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }

    /// Whether this token is a multiplicative operator (`*` or `/`).
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Plus => f.write_str("`+'"),
            Self::Minus => f.write_str("`-'"),
            Self::Mul => f.write_str("`*'"),
            Self::Div => f.write_str("`/'"),
            Self::LParen => f.write_str("`('"),
            Self::RParen => f.write_str("`)'"),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A token together with its start and end byte offsets.
pub type Spanned = (usize, Token, usize);
