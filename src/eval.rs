use std::error;
use std::fmt;
use std::fmt::{Display, Formatter};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::lexer::{Lexer, LexerError, Token, TokenKind};
use crate::result::EvalResult;

/// What the evaluator's grammar was expecting when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Num,
    OperatorOrEnd,
}

impl Display for Expected {
    fn fmt(&self, out: &mut Formatter) -> fmt::Result {
        match self {
            Expected::Num => out.write_str("a number"),
            Expected::OperatorOrEnd => out.write_str("an operator or end of input"),
        }
    }
}

/// A description of the error of a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The lexer could not produce a token.
    Lexer(LexerError),

    /// The grammar expectation was violated.
    UnexpectedToken { expected: Expected, found: Token },

    /// The right-hand operand of `/` was zero.
    DivisionByZero,
}

impl From<LexerError> for EvalError {
    fn from(err: LexerError) -> EvalError {
        EvalError::Lexer(err)
    }
}

impl Display for EvalError {
    fn fmt(&self, out: &mut Formatter) -> fmt::Result {
        match self {
            EvalError::Lexer(err) => err.fmt(out),
            EvalError::UnexpectedToken { expected, found } => write!(
                out,
                "expected {}, found {} at index {}",
                expected, found.kind, found.index
            ),
            EvalError::DivisionByZero => out.write_str("division by zero"),
        }
    }
}

impl error::Error for EvalError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EvalError::Lexer(err) => Some(err),
            _ => None,
        }
    }
}

/// An evaluator pulls tokens from a lexer and folds them into a result as it
/// goes, without building a tree first.
///
/// The grammar is a flat chain of binary operations over integer literals:
///
/// ```text
/// expression := factor ( ( '+' | '-' | '*' | '/' ) factor )*
/// factor     := INTEGER
/// ```
///
/// All four operators are applied strictly left to right with no precedence
/// between them, so `2+3*4` evaluates to `20`.
pub struct Evaluator<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Evaluator<'a> {
    pub fn new(lexer: Lexer<'a>) -> Evaluator<'a> {
        Evaluator { lexer }
    }

    fn expect_num(&mut self) -> Result<BigRational, EvalError> {
        let token = self.lexer.next_token()?;

        match token.kind {
            TokenKind::Num(val) => Ok(BigRational::from_integer(BigInt::from(val))),
            _ => Err(EvalError::UnexpectedToken {
                expected: Expected::Num,
                found: token,
            }),
        }
    }

    /// Consumes the whole token stream and returns the result of the
    /// expression.
    pub fn eval(mut self) -> Result<EvalResult, EvalError> {
        let mut acc = self.expect_num()?;

        loop {
            let token = self.lexer.next_token()?;

            let op = match token.kind {
                TokenKind::End => return Ok(EvalResult { val: acc }),
                kind if kind.is_operator() => kind,
                _ => {
                    return Err(EvalError::UnexpectedToken {
                        expected: Expected::OperatorOrEnd,
                        found: token,
                    });
                }
            };

            let rhs = self.expect_num()?;

            acc = match op {
                TokenKind::Plus => acc + rhs,
                TokenKind::Minus => acc - rhs,
                TokenKind::Times => acc * rhs,
                TokenKind::Slash => {
                    if rhs.is_zero() {
                        return Err(EvalError::DivisionByZero);
                    }

                    acc / rhs
                }
                _ => unreachable!(),
            };
        }
    }
}
