//! Classification of raw `#define` values.
//!
//! Values are tested in a fixed order: string literal, integer literal,
//! character literal, and finally alias. Anything that starts with a digit
//! (after an optional `-`) is an integer literal; C identifiers cannot, so
//! a malformed number is reported instead of being looked up as a name.

use crate::error::LiteralError;

/// Interpretation of a raw value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Literal<'a> {
    /// Double-quoted string. Carries no integer meaning.
    Str(&'a str),
    /// Decimal or hexadecimal integer.
    Int(i64),
    /// Single-quoted character, e.g. `'E'`.
    Char(char),
    /// Name of another definition.
    Alias(&'a str),
}

impl<'a> Literal<'a> {
    /// Classify a raw value.
    pub fn classify(raw: &'a str) -> Result<Self, LiteralError> {
        if raw.starts_with('"') {
            return Ok(Self::Str(raw));
        }
        if looks_numeric(raw) {
            return parse_integer(raw).map(Self::Int);
        }
        if let Some(ch) = char_literal(raw) {
            return Ok(Self::Char(ch));
        }
        Ok(Self::Alias(raw))
    }

    /// Integer value, for literals that have one.
    pub fn integer(&self) -> Option<i64> {
        match *self {
            Self::Int(n) => Some(n),
            Self::Char(ch) => Some(ch as i64),
            Self::Str(_) | Self::Alias(_) => None,
        }
    }
}

fn looks_numeric(raw: &str) -> bool {
    let body = raw.strip_prefix('-').unwrap_or(raw);
    body.starts_with(|ch: char| ch.is_ascii_digit())
}

/// Parse a C integer literal.
///
/// Accepts decimal and `0x`/`0X` hexadecimal digits, an optional leading
/// `-`, and any trailing `U`/`L` suffix. Values up to `u64::MAX` are
/// accepted and reinterpreted as two's-complement `i64`.
pub fn parse_integer(raw: &str) -> Result<i64, LiteralError> {
    let (negative, body) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    let body = body.trim_end_matches(['u', 'U', 'l', 'L']);

    let (digits, radix) = match body.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("0x") => (&body[2..], 16),
        _ => (body, 10),
    };
    if digits.is_empty() {
        return Err(LiteralError::MissingDigits);
    }

    let mut magnitude: u64 = 0;
    for digit in digits.chars() {
        let d = digit
            .to_digit(radix)
            .ok_or(LiteralError::InvalidDigit { digit, radix })?;
        magnitude = magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(d)))
            .ok_or(LiteralError::OutOfRange)?;
    }

    if negative {
        if magnitude > i64::MIN.unsigned_abs() {
            return Err(LiteralError::OutOfRange);
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        Ok(magnitude as i64)
    }
}

fn char_literal(raw: &str) -> Option<char> {
    let inner = raw.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
