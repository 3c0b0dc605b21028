//! Double-precision arithmetic and operand parsing. Of the operations only
//! [`divide`] and [`sqrt`] can fail.

use crate::error::{CalcError, CalcResult, NumberError};

/// Parses a single token with the standard float grammar. Surrounding
/// whitespace is not trimmed, and finite spellings that overflow to
/// infinity are rejected; only `inf`/`infinity` may produce one.
pub fn parse_number(token: &str) -> Result<f64, NumberError> {
    let invalid = || NumberError {
        token: token.to_string(),
    };

    let value: f64 = token.parse().map_err(|_| invalid())?;
    if value.is_infinite() && !is_infinity_literal(token) {
        return Err(invalid());
    }
    Ok(value)
}

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Fails when `b` compares equal to zero, which includes `-0.0`.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

/// Rejects strictly negative input; `sqrt(-0.0)` is allowed.
pub fn sqrt(a: f64) -> CalcResult<f64> {
    if a < 0.0 {
        return Err(CalcError::NegativeSqrt);
    }
    Ok(a.sqrt())
}
