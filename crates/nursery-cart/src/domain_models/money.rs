//! Money model
//!
//! Cart totals are summed in integer cents so that `"10" + "12.50"` is
//! exactly `22.50`, whatever the input representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Amount of money in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Parse a decimal amount such as `"15"`, `"12.50"` or `"$9.99"`
    ///
    /// Digits beyond the second decimal place are rounded half up.
    /// Negative amounts, signs other than a leading `$` and empty input are
    /// rejected.
    pub fn parse(input: &str) -> Option<Money> {
        let trimmed = input.trim();
        let amount = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        let (whole, fraction) = amount.split_once('.').unwrap_or((amount, ""));

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return None;
        }

        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let mut digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = digits.next().unwrap_or(0);
        let hundredths = digits.next().unwrap_or(0);
        let round_up = digits.next().is_some_and(|d| d >= 5);

        whole
            .checked_mul(100)?
            .checked_add(tenths * 10 + hundredths + i64::from(round_up))
            .map(Money)
    }

    /// Convert a floating point amount, rounded to the nearest cent
    pub fn from_f64(amount: f64) -> Option<Money> {
        let cents = (amount * 100.0).round();
        if !cents.is_finite() || cents < 0.0 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Sum of two amounts, `None` on overflow
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Format with a currency symbol, e.g. `$22.50`
    pub fn with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self)
    }
}

/// Two decimal places, no currency symbol: `22.50`
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}
