extern crate flatcalc;
extern crate num_rational;

use flatcalc::eval_line;
use flatcalc::eval::{EvalError, Expected};
use flatcalc::lexer::{LexerError, LexerErrorKind, TokenKind};

use num_rational::BigRational;

fn value(expr: &str) -> BigRational {
    eval_line(expr).unwrap().val
}

fn int(val: i64) -> BigRational {
    BigRational::from_integer(val.into())
}

#[test]
fn two_operand_expressions() {
    assert_eq!(value("3+4"), int(7));
    assert_eq!(value("10-4"), int(6));
    assert_eq!(value("6*9"), int(54));
    assert_eq!(value("9/3"), int(3));
}

#[test]
fn whitespace_is_insignificant_between_tokens() {
    assert_eq!(value("  12   -   5  "), int(7));
    assert_eq!(value("\t3 +\t4\r"), int(7));
    assert_eq!(value("3+4"), value(" 3 + 4 "));
}

#[test]
fn multi_digit_numbers() {
    assert_eq!(value("123+456"), int(579));
}

#[test]
fn chains_evaluate_left_to_right_with_no_precedence() {
    assert_eq!(value("2+3*4"), int(20));
    assert_eq!(value("10-2-3"), int(5));
    assert_eq!(value("20/5/2"), int(2));
    assert_eq!(eval_line("20/5/2").unwrap().to_f64(), Some(2.0));
}

#[test]
fn division_keeps_the_exact_quotient() {
    let result = eval_line("7/2").unwrap();
    assert_eq!(result.val, BigRational::new(7.into(), 2.into()));
    assert_eq!(result.to_f64(), Some(3.5));
    assert_eq!(result.to_string(), "3.5");
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(eval_line("5/0"), Err(EvalError::DivisionByZero));
}

#[test]
fn invalid_characters_are_reported_with_their_offset() {
    match eval_line("3+a") {
        Err(EvalError::Lexer(LexerError {
            kind: LexerErrorKind::InvalidCharacter('a'),
            index: 2,
        })) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn trailing_operator_is_an_unexpected_token() {
    match eval_line("3+") {
        Err(EvalError::UnexpectedToken {
            expected: Expected::Num,
            found,
        }) => assert_eq!(found.kind, TokenKind::End),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn leading_operator_is_an_unexpected_token() {
    match eval_line("+3") {
        Err(EvalError::UnexpectedToken {
            expected: Expected::Num,
            found,
        }) => assert_eq!(found.kind, TokenKind::Plus),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn empty_lines_fail_to_evaluate() {
    match eval_line("") {
        Err(EvalError::UnexpectedToken {
            expected: Expected::Num,
            ..
        }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn errors_render_a_human_readable_message() {
    assert_eq!(
        eval_line("3+a").unwrap_err().to_string(),
        "invalid character 'a' at index 2"
    );
    assert_eq!(
        eval_line("5/0").unwrap_err().to_string(),
        "division by zero"
    );
    assert_eq!(
        eval_line("3+").unwrap_err().to_string(),
        "expected a number, found end of input at index 2"
    );
}
