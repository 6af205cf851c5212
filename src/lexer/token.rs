use num_bigint::BigUint;

use std::fmt;
use std::fmt::{Display, Formatter};

/// Tokens are simple things like numbers and operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A non-negative integer literal
    Num(BigUint),
    Plus,
    Minus,
    Times,
    Slash,

    /// Produced once the input is exhausted, then forever after
    End,
}

impl TokenKind {
    pub fn from_single_char(c: char) -> Option<TokenKind> {
        Some(match c {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Times,
            '/' => TokenKind::Slash,
            _ => return None,
        })
    }

    /// Returns true for the four binary operator kinds.
    pub fn is_operator(&self) -> bool {
        match self {
            TokenKind::Plus | TokenKind::Minus | TokenKind::Times | TokenKind::Slash => true,
            _ => false,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, out: &mut Formatter) -> fmt::Result {
        match self {
            TokenKind::Num(val) => write!(out, "number {}", val),
            TokenKind::Plus => out.write_str("'+'"),
            TokenKind::Minus => out.write_str("'-'"),
            TokenKind::Times => out.write_str("'*'"),
            TokenKind::Slash => out.write_str("'/'"),
            TokenKind::End => out.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// The index of the first character of the token
    pub index: usize,
}
