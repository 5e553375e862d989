//! Whole-unit price representation.
//!
//! Catalog prices are whole currency units (rupees), so a price is a plain
//! `i64`. Arithmetic saturates instead of wrapping; a cart never reaches
//! those magnitudes, but the totals stay total functions.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::Quantity;

/// Currency prefix used when no other symbol is configured.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "Rs.";

/// A price in whole currency units.
///
/// Negative values are representable and carried through unchanged; the
/// cart does not validate catalog data.
///
/// ```
/// use renu_core::Price;
///
/// let price = Price::new(1500);
/// assert_eq!(price.grouped(), "1,500");
/// assert_eq!(price.to_string(), "Rs. 1,500");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole units.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity.get())))
    }

    /// Amount with `en-US` thousands separators, e.g. `12,500`.
    #[must_use]
    pub fn grouped(self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format for display with the given currency prefix (e.g., "Rs. 1,500").
    #[must_use]
    pub fn display_with(self, symbol: &str) -> String {
        format!("{symbol} {}", self.grouped())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DEFAULT_CURRENCY_SYMBOL} {}", self.grouped())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}
