mod token;

use std::error;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::FusedIterator;

use num_bigint::BigUint;
use num_traits::Zero;

pub use self::token::*;

/// The kind of a lexer error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    /// A character that is not a digit, whitespace or one of `+ - * /`
    InvalidCharacter(char),
}

/// When the expression is malformed, the lexer will return this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    /// The error kind
    pub kind: LexerErrorKind,

    /// The index of the first character which caused the error
    pub index: usize,
}

impl Display for LexerError {
    fn fmt(&self, out: &mut Formatter) -> fmt::Result {
        match self.kind {
            LexerErrorKind::InvalidCharacter(c) => {
                write!(out, "invalid character {:?} at index {}", c, self.index)
            }
        }
    }
}

impl error::Error for LexerError {}

/// A lexer reads an arithmetic expression and returns the tokens in the
/// expression one at a time.
/// This allows us to read the expression in a simpler way later when we want
/// to evaluate it.
pub struct Lexer<'a> {
    expr: &'a [u8],
    index: usize,
    has_failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer from an expression.
    pub fn new(expr: &str) -> Lexer {
        Lexer {
            expr: expr.as_bytes(),
            index: 0,
            has_failed: false,
        }
    }

    fn consume_whitespace(&mut self) {
        while self.index < self.expr.len() {
            match self.expr[self.index] as char {
                ' ' | '\n' | '\r' | '\t' => {}
                _ => break,
            }

            self.index += 1;
        }
    }

    fn try_consume_single_char_token(&mut self) -> Option<Token> {
        if self.index < self.expr.len() {
            let original_index = self.index;
            let c = self.expr[self.index] as char;

            if let Some(kind) = TokenKind::from_single_char(c) {
                // consume the character
                self.index += 1;

                return Some(Token {
                    kind,
                    index: original_index,
                });
            }
        }

        None
    }

    fn try_consume_num(&mut self) -> Option<Token> {
        let original_index = self.index;
        let mut val: BigUint = Zero::zero();
        let mut has_digit = false;

        while self.index < self.expr.len() {
            let c = self.expr[self.index] as char;

            match c.to_digit(10) {
                Some(digit) => {
                    val *= 10u32;
                    val += digit;

                    has_digit = true;
                }
                None => break,
            }

            self.index += 1;
        }

        if !has_digit {
            return None;
        }

        Some(Token {
            kind: TokenKind::Num(val),
            index: original_index,
        })
    }

    /// Returns the next token in the expression.
    ///
    /// Once the input is exhausted, this returns an `End` token and keeps
    /// returning it on every further call without advancing.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.consume_whitespace();

        // is there anything left?
        if self.index >= self.expr.len() {
            return Ok(Token {
                kind: TokenKind::End,
                index: self.expr.len(),
            });
        }

        let original_index = self.index;
        self.try_consume_num()
            .or_else(|| self.try_consume_single_char_token())
            .ok_or_else(|| LexerError {
                kind: LexerErrorKind::InvalidCharacter(self.expr[original_index] as char),
                index: original_index,
            })
    }
}

// This means that when it returns a none option, then it will keep returning
// none options.
impl<'a> FusedIterator for Lexer<'a> {}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexerError>;

    /// Yields the tokens before `End`; errors fuse the iterator.
    fn next(&mut self) -> Option<Self::Item> {
        if self.has_failed {
            return None;
        }

        match self.next_token() {
            Ok(token) => {
                if token.kind == TokenKind::End {
                    return None;
                }
                Some(Ok(token))
            }
            Err(err) => {
                self.has_failed = true;
                Some(Err(err))
            }
        }
    }
}
