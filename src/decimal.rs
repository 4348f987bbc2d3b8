//! Fixed-point decimal for opening balances.
//!
//! Stores values as integers with 4 decimal places of precision
//! (i.e., value × 10,000). Parsing is exact: input that cannot be represented
//! is rejected rather than rounded.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Digits kept after the decimal point.
pub const SCALE_DIGITS: usize = 4;
const SCALE: i64 = 10_000;

/// Fixed-point decimal with 4 decimal places.
///
/// Stores value * 10000 internally (e.g., 1.5 is stored as 15000).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDecimalError {
    #[error("not a decimal number")]
    Invalid,
    #[error("more than 4 digits after the decimal point")]
    TooPrecise,
    #[error("value out of range")]
    OutOfRange,
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Shortest decimal form: "10" rather than "10.0"
        serializer.collect_str(self)
    }
}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    /// Accepts `[+-]digits[.digits]` with at most 4 fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(ParseDecimalError::Invalid);
        }
        if frac.len() > SCALE_DIGITS {
            return Err(ParseDecimalError::TooPrecise);
        }

        let whole_value = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().map_err(|_| ParseDecimalError::OutOfRange)?
        };
        let frac_value = format!("{:0<width$}", frac, width = SCALE_DIGITS)
            .parse::<i64>()
            .map_err(|_| ParseDecimalError::Invalid)?;

        let magnitude = whole_value
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(frac_value))
            .ok_or(ParseDecimalError::OutOfRange)?;
        Ok(Decimal(if negative { -magnitude } else { magnitude }))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let whole = abs / SCALE as u64;
        let frac = abs % SCALE as u64;

        if self.0 < 0 {
            write!(f, "-")?;
        }

        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            // Remove trailing zeros from fraction
            let frac_str = format!("{:04}", frac);
            write!(f, "{}.{}", whole, frac_str.trim_end_matches('0'))
        }
    }
}
