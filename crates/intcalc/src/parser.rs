//! Recursive-descent parser.
//!
//! ```text
//! expr    := operand ( ('+' | '-') operand )*
//! operand := factor  ( ('*' | '/') factor )*
//! factor  := INTEGER | '(' expr ')'
//! ```
//!
//! Both binary levels fold to the left, so `a - b - c` parses as
//! `(a - b) - c`.

use crate::{
    ast::{BinOp, Expr},
    error::{Error, SyntaxError},
    lexer::Lexer,
    token::{Spanned, Token},
};

#[derive(Debug, Copy, Clone)]
pub struct Config {
    max_nesting_depth: usize,
}

impl Config {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

    pub const fn new() -> Self {
        Self {
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Set the maximum number of parentheses that may be open at once.
    pub fn max_nesting_depth(&mut self, depth: usize) -> &mut Self {
        self.max_nesting_depth = depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `source` as a single expression with the default configuration.
pub fn parse(source: &str) -> Result<Expr, Error> {
    Parser::new(Lexer::new(source), Config::new())?.parse()
}

pub struct Parser<'source> {
    lexer: Lexer<'source>,
    lookahead: Spanned,
    config: Config,
    depth: usize,
}

impl<'source> Parser<'source> {
    pub fn new(mut lexer: Lexer<'source>, config: Config) -> Result<Self, Error> {
        let lookahead = lexer.next_token()?;
        Ok(Self {
            lexer,
            lookahead,
            config,
            depth: 0,
        })
    }

    /// Parses one complete expression, rejecting any trailing input.
    pub fn parse(mut self) -> Result<Expr, Error> {
        let span = tracing::trace_span!("parse");
        let _entered = span.enter();

        let expr = self.expr()?;
        self.eat(Token::EndOfInput, "an operator or end of input")?;
        Ok(expr)
    }

    fn expr(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.operand()?;
        while self.current().is_additive() {
            let op = match self.bump()? {
                Token::Plus => BinOp::Add,
                _ => BinOp::Sub,
            };
            let rhs = self.operand()?;
            tracing::trace!("fold: expr -> expr `{}' operand", op);
            lhs = Expr::binary(lhs, op, rhs);
        }
        Ok(lhs)
    }

    fn operand(&mut self) -> Result<Expr, Error> {
        let mut lhs = self.factor()?;
        while self.current().is_multiplicative() {
            let op = match self.bump()? {
                Token::Mul => BinOp::Mul,
                _ => BinOp::Div,
            };
            let rhs = self.factor()?;
            tracing::trace!("fold: operand -> operand `{}' factor", op);
            lhs = Expr::binary(lhs, op, rhs);
        }
        Ok(lhs)
    }

    fn factor(&mut self) -> Result<Expr, Error> {
        match self.current() {
            Token::Integer(n) => {
                self.bump()?;
                Ok(Expr::Integer(n))
            }
            Token::LParen => {
                if self.depth >= self.config.max_nesting_depth {
                    return Err(SyntaxError::NestingTooDeep {
                        limit: self.config.max_nesting_depth,
                        offset: self.lookahead.0,
                    }
                    .into());
                }
                self.bump()?;
                self.depth += 1;
                let expr = self.expr()?;
                self.eat(Token::RParen, "`)'")?;
                self.depth -= 1;
                tracing::trace!("factor -> `(' expr `)'");
                Ok(expr)
            }
            _ => Err(self.unexpected("an integer or `('")),
        }
    }

    fn current(&self) -> Token {
        self.lookahead.1
    }

    /// Consumes the lookahead token and pulls the next one from the lexer.
    fn bump(&mut self) -> Result<Token, Error> {
        let next = self.lexer.next_token()?;
        let (_, token, _) = std::mem::replace(&mut self.lookahead, next);
        Ok(token)
    }

    fn eat(&mut self, expected: Token, description: &'static str) -> Result<(), Error> {
        if self.current() != expected {
            return Err(self.unexpected(description));
        }
        // the end marker is never shifted, so the lexer is not pulled past it.
        if expected != Token::EndOfInput {
            self.bump()?;
        }
        Ok(())
    }

    fn unexpected(&self, expected: &'static str) -> Error {
        let (offset, found, _) = self.lookahead;
        SyntaxError::UnexpectedToken {
            expected,
            found,
            offset,
        }
        .into()
    }
}
