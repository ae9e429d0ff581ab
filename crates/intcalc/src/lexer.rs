//! Lexer implementation.

use crate::{
    error::{LexError, LexErrorKind},
    token::{Spanned, Token},
};
use logos::Logos;

#[derive(Debug, Copy, Clone, PartialEq, Logos)]
#[logos(skip r" +")]
#[logos(error = RawError)]
enum RawToken {
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| RawError::Overflow))]
    Integer(i64),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

#[derive(Debug, Default, Clone, PartialEq)]
enum RawError {
    #[default]
    Unrecognized,
    Overflow,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Integer(n) => Token::Integer(n),
            RawToken::Plus => Token::Plus,
            RawToken::Minus => Token::Minus,
            RawToken::Mul => Token::Mul,
            RawToken::Div => Token::Div,
            RawToken::LParen => Token::LParen,
            RawToken::RParen => Token::RParen,
        }
    }
}

/// Pull-based lexer over a single input string.
///
/// Tokens are produced on demand, one per call to [`Lexer::next_token`].
pub struct Lexer<'source> {
    source: &'source str,
    inner: logos::Lexer<'source, RawToken>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source),
            finished: false,
        }
    }

    /// Returns the next token in the input.
    ///
    /// Once the input is exhausted, every subsequent call returns
    /// [`Token::EndOfInput`] positioned at the end of the source.
    pub fn next_token(&mut self) -> Result<Spanned, LexError> {
        if self.finished {
            return Ok(self.end_of_input());
        }
        match self.inner.next() {
            Some(Ok(raw)) => {
                let span = self.inner.span();
                Ok((span.start, raw.into(), span.end))
            }
            Some(Err(err)) => {
                let offset = self.inner.span().start;
                let kind = match err {
                    RawError::Overflow => LexErrorKind::IntegerOverflow,
                    RawError::Unrecognized => {
                        let ch = self.source[offset..]
                            .chars()
                            .next()
                            .unwrap_or(char::REPLACEMENT_CHARACTER);
                        LexErrorKind::UnexpectedSymbol(ch)
                    }
                };
                Err(LexError { kind, offset })
            }
            None => {
                self.finished = true;
                Ok(self.end_of_input())
            }
        }
    }

    fn end_of_input(&self) -> Spanned {
        let len = self.source.len();
        (len, Token::EndOfInput, len)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok((_, Token::EndOfInput, _)) => None,
            res => Some(res),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Token::*;

    fn tokens(input: &str) -> Result<Vec<Token>, LexError> {
        Lexer::new(input).map(|res| res.map(|(_, t, _)| t)).collect()
    }

    #[test]
    fn smoketest() {
        let tokens = tokens("(561 - 5 * (52 + 59)) / 7").unwrap();
        assert_eq!(
            tokens,
            [
                LParen,
                Integer(561),
                Minus,
                Integer(5),
                Mul,
                LParen,
                Integer(52),
                Plus,
                Integer(59),
                RParen,
                RParen,
                Div,
                Integer(7),
            ]
        );
    }

    #[test]
    fn spans() {
        let mut lexer = Lexer::new("  12 +3");
        assert_eq!(lexer.next_token(), Ok((2, Integer(12), 4)));
        assert_eq!(lexer.next_token(), Ok((5, Plus, 6)));
        assert_eq!(lexer.next_token(), Ok((6, Integer(3), 7)));
        assert_eq!(lexer.next_token(), Ok((7, EndOfInput, 7)));
    }

    #[test]
    fn maximal_digit_run() {
        assert_eq!(tokens("007 12").unwrap(), [Integer(7), Integer(12)]);
    }

    #[test]
    fn empty_input() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.next_token(), Ok((0, EndOfInput, 0)));
        assert!(tokens("   ").unwrap().is_empty());
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut lexer = Lexer::new("1");
        assert_eq!(lexer.next_token(), Ok((0, Integer(1), 1)));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Ok((1, EndOfInput, 1)));
        }
    }

    #[test]
    fn unexpected_symbol() {
        let err = tokens("1 $ 2").unwrap_err();
        assert_eq!(
            err,
            LexError {
                kind: LexErrorKind::UnexpectedSymbol('$'),
                offset: 2,
            }
        );
    }

    #[test]
    fn only_spaces_are_skipped() {
        for (input, ch) in [("1\t+ 2", '\t'), ("1 +\n2", '\n'), ("1 + ２", '２')] {
            let err = tokens(input).unwrap_err();
            assert_eq!(err.kind, LexErrorKind::UnexpectedSymbol(ch), "{:?}", input);
        }
    }

    #[test]
    fn integer_overflow() {
        assert_eq!(
            tokens("9223372036854775807").unwrap(),
            [Integer(i64::MAX)]
        );
        let err = tokens("1 + 9223372036854775808").unwrap_err();
        assert_eq!(
            err,
            LexError {
                kind: LexErrorKind::IntegerOverflow,
                offset: 4,
            }
        );
    }
}
