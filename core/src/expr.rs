//! Constrained arithmetic evaluation for token sub-expressions.
//!
//! Tokens may carry simple integer arithmetic ("1500-500"). Only the four
//! operators, parentheses, unary signs, and integer literals are accepted;
//! anything else is an error, never a panic.

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExprError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("integer literal out of range")]
    LiteralOverflow,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("division by zero")]
    DivisionByZero,
}

type Stream<'a> = Peekable<Chars<'a>>;

/// Evaluate a whole expression string to an integer.
pub fn eval(input: &str) -> Result<i64, ExprError> {
    let mut chars = input.chars().peekable();
    let value = expression(&mut chars)?;
    match chars.next() {
        Some(c) => Err(ExprError::UnexpectedChar(c)),
        None => Ok(value),
    }
}

fn expression(chars: &mut Stream<'_>) -> Result<i64, ExprError> {
    let mut value = term(chars)?;
    loop {
        let op = match chars.peek() {
            Some('+') => '+',
            Some('-') => '-',
            _ => break,
        };
        chars.next();
        let rhs = term(chars)?;
        value = match op {
            '+' => value.checked_add(rhs),
            _ => value.checked_sub(rhs),
        }
        .ok_or(ExprError::Overflow)?;
    }
    Ok(value)
}

fn term(chars: &mut Stream<'_>) -> Result<i64, ExprError> {
    let mut value = factor(chars)?;
    loop {
        let op = match chars.peek() {
            Some('*') => '*',
            Some('/') => '/',
            _ => break,
        };
        chars.next();
        let rhs = factor(chars)?;
        value = match op {
            '*' => value.checked_mul(rhs).ok_or(ExprError::Overflow)?,
            _ => {
                if rhs == 0 {
                    return Err(ExprError::DivisionByZero);
                }
                value.checked_div(rhs).ok_or(ExprError::Overflow)?
            }
        };
    }
    Ok(value)
}

fn factor(chars: &mut Stream<'_>) -> Result<i64, ExprError> {
    match chars.peek() {
        Some('(') => {
            chars.next();
            let value = expression(chars)?;
            match chars.next() {
                Some(')') => Ok(value),
                Some(c) => Err(ExprError::UnexpectedChar(c)),
                None => Err(ExprError::UnexpectedEnd),
            }
        }
        Some('-') => {
            chars.next();
            factor(chars)?.checked_neg().ok_or(ExprError::Overflow)
        }
        Some('+') => {
            chars.next();
            factor(chars)
        }
        Some(c) if c.is_ascii_digit() => number(chars),
        Some(&c) => Err(ExprError::UnexpectedChar(c)),
        None => Err(ExprError::UnexpectedEnd),
    }
}

fn number(chars: &mut Stream<'_>) -> Result<i64, ExprError> {
    let mut value: i64 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit as i64))
            .ok_or(ExprError::LiteralOverflow)?;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_subtraction() {
        assert_eq!(eval("1500-500"), Ok(1000));
    }

    #[test]
    fn precedence_and_parentheses() {
        assert_eq!(eval("2+3*4"), Ok(14));
        assert_eq!(eval("3*(2+4)"), Ok(18));
    }

    #[test]
    fn division_truncates() {
        assert_eq!(eval("10/3"), Ok(3));
        assert_eq!(eval("-10/3"), Ok(-3));
    }

    #[test]
    fn unary_signs() {
        assert_eq!(eval("-5"), Ok(-5));
        assert_eq!(eval("-(2+3)"), Ok(-5));
        assert_eq!(eval("+55"), Ok(55));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(eval("2a"), Err(ExprError::UnexpectedChar('a')));
        assert_eq!(eval("2+"), Err(ExprError::UnexpectedEnd));
        assert_eq!(eval(""), Err(ExprError::UnexpectedEnd));
        assert_eq!(eval("(2"), Err(ExprError::UnexpectedEnd));
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(eval("1/0"), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(
            eval("9223372036854775808"),
            Err(ExprError::LiteralOverflow)
        );
        assert_eq!(
            eval("9223372036854775807*2"),
            Err(ExprError::Overflow)
        );
    }
}
