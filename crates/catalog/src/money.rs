//! Price representation and display/storage conversion.
//!
//! Prices are stored as an integer number of minor currency units (cents) to
//! avoid floating-point rounding error, and rendered to the edit surface as a
//! decimal dollar string with exactly two fraction digits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockbook_core::ValueObject;

/// Error raised when a display string cannot be parsed as a price.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Input was not a non-negative decimal amount.
    #[error("invalid price format: {0:?}")]
    InvalidPriceFormat(String),
}

/// A non-negative price in minor currency units (cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Render as a decimal dollar string with exactly two fraction digits and
    /// no thousands separators: `100 -> "1.00"`, `1550 -> "15.50"`,
    /// `999999999 -> "9999999.99"`.
    pub fn to_display(&self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }

    /// Parse a user-edited decimal dollar string into cents.
    ///
    /// Accepts surrounding whitespace, ASCII digits and at most one decimal
    /// point (`"29.99"`, `"5"`, `".50"`, `"7."`). Fraction digits beyond the
    /// second are rounded **half-up** on the third digit, so `"1.005"` is 101
    /// cents and `"1.0049"` is 100. Anything else - empty input, signs,
    /// letters, a second decimal point, or an amount past `u64::MAX` cents -
    /// is a [`PriceError::InvalidPriceFormat`].
    pub fn to_cents(display: &str) -> Result<Self, PriceError> {
        let err = || PriceError::InvalidPriceFormat(display.to_string());

        let raw = display.trim();
        let (whole, frac) = match raw.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (raw, ""),
        };

        // At least one digit somewhere; "" and "." carry no amount.
        if whole.is_empty() && frac.is_empty() {
            return Err(err());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let mut cents: u64 = 0;
        for b in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(u64::from(b - b'0')))
                .ok_or_else(err)?;
        }
        cents = cents.checked_mul(100).ok_or_else(err)?;

        let mut frac_digits = frac.bytes().map(|b| u64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        cents = cents.checked_add(tenths * 10 + hundredths).ok_or_else(err)?;

        // Round half-up on the third fraction digit; digits past it cannot
        // move the result across the half-cent boundary.
        if frac_digits.next().is_some_and(|d| d >= 5) {
            cents = cents.checked_add(1).ok_or_else(err)?;
        }

        Ok(Self(cents))
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_display())
    }
}

impl core::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::to_cents(s)
    }
}
