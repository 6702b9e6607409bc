//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (cents, pence, yen) as i64 to
//! avoid floating-point precision issues. Arithmetic saturates at the i64
//! bounds, since decoded amounts may take any int64 value; use the
//! `checked_*` methods to detect overflow instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::profile::Profile;
use crate::codec::{ByteStream, Decode, Encode};
use crate::error::BudgeteerResult;

/// A signed amount in the minor unit of some currency
///
/// On the wire this is a plain int64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use budgeteer::models::Money;
    /// let amount = Money::from_minor_units(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Whole major units, truncated toward zero
    pub const fn major_units(&self) -> i64 {
        self.0 / 100
    }

    /// Hundredths portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value, saturating at `i64::MAX`
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Add, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }

    /// Subtract, returning `None` on overflow
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(diff) => Some(Self(diff)),
            None => None,
        }
    }

    /// Format with a currency symbol
    ///
    /// Decimal currencies render as `$5.00`; others render the raw minor
    /// units, as in `¥500`.
    pub fn format_with_symbol(&self, symbol: &str, decimal: bool) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        if decimal {
            format!(
                "{}{}{}.{:02}",
                sign,
                symbol,
                self.major_units().abs(),
                self.minor_part()
            )
        } else {
            format!("{}{}{}", sign, symbol, self.0.unsigned_abs())
        }
    }

    /// Format using a profile's currency preferences
    pub fn format(&self, profile: &Profile) -> String {
        self.format_with_symbol(&profile.currency_symbol, profile.is_decimal_currency)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$", true))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Encode for Money {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_i64(self.0);
    }
}

impl Decode for Money {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        Ok(Self(stream.read_i64()?))
    }
}
