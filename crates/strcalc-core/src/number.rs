//! Tokenizing, validating and summing number tokens
//!
//! Numeric casting here is deliberately forgiving: leading whitespace is
//! skipped, parsing stops at the first non-digit (`"1.9"` is 1), and a token
//! with no leading digits counts as 0. Only empty tokens and negative values
//! are rejected.

use crate::delimiter::MAIN_DELIMITER;
use crate::error::{CalculatorError, CalculatorResult};

/// Splits normalized input on the main delimiter. Tokens are not trimmed.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split(MAIN_DELIMITER).collect()
}

/// C-style string-to-integer cast.
///
/// Skips leading whitespace, accepts one optional sign, then reads decimal
/// digits until the first other character. Saturates instead of overflowing.
pub fn lenient_parse(token: &str) -> i64 {
    let trimmed = token.trim_start_matches(is_cast_whitespace);
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    digits.bytes().take_while(u8::is_ascii_digit).fold(0i64, |value, digit| {
        let digit = i64::from(digit - b'0');
        if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        }
    })
}

fn is_cast_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Rejects empty tokens immediately and negative tokens after a full scan.
///
/// Negatives are reported with their original text, in input order.
pub fn validate(tokens: &[&str]) -> CalculatorResult<()> {
    let mut negatives = Vec::new();

    for token in tokens {
        if token.is_empty() {
            return Err(CalculatorError::empty_argument());
        }
        if lenient_parse(token) < 0 {
            negatives.push(token.to_string());
        }
    }

    if negatives.is_empty() {
        Ok(())
    } else {
        Err(CalculatorError::negative_argument(negatives))
    }
}

/// Sums the tokens whose value does not exceed `maximum`.
pub fn sum_within(tokens: &[&str], maximum: i64) -> i64 {
    tokens
        .iter()
        .map(|token| lenient_parse(token))
        .filter(|value| *value <= maximum)
        .fold(0i64, i64::saturating_add)
}
