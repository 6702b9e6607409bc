//! Transaction model
//!
//! A dated, titled transfer of an amount of currency. Dates are stored as a
//! signed count of days since 1970-01-01.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::codec::{ByteStream, Decode, Encode};
use crate::error::BudgeteerResult;

/// A financial transaction
///
/// Wire form: int64 epoch day, int64 minor-unit amount, shortstring title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Days before (negative) or since 1970-01-01
    pub epoch_day: i64,

    /// Amount (positive for inflow, negative for outflow)
    pub amount: Money,

    pub title: String,
}

fn unix_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

impl Transaction {
    /// Create a transaction dated by epoch day
    pub fn new(epoch_day: i64, amount: Money, title: impl Into<String>) -> Self {
        Self {
            epoch_day,
            amount,
            title: title.into(),
        }
    }

    /// Create a transaction dated on a calendar day
    pub fn from_date(date: NaiveDate, amount: Money, title: impl Into<String>) -> Self {
        let epoch_day = date.signed_duration_since(unix_epoch()).num_days();
        Self::new(epoch_day, amount, title)
    }

    /// The calendar date, or `None` if the epoch day is outside chrono's range
    pub fn date(&self) -> Option<NaiveDate> {
        let days = Days::new(self.epoch_day.unsigned_abs());
        if self.epoch_day >= 0 {
            unix_epoch().checked_add_days(days)
        } else {
            unix_epoch().checked_sub_days(days)
        }
    }

    /// Check if this is an inflow (positive amount)
    pub fn is_inflow(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is an outflow (negative amount)
    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date() {
            Some(date) => write!(f, "{} {} {}", date, self.title, self.amount),
            None => write!(f, "day {} {} {}", self.epoch_day, self.title, self.amount),
        }
    }
}

impl Encode for Transaction {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_i64(self.epoch_day);
        stream.write_value(&self.amount);
        stream.append_string(&self.title);
    }
}

impl Decode for Transaction {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        Ok(Self {
            epoch_day: stream.read_i64()?,
            amount: Money::decode(stream)?,
            title: stream.read_string()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_conversion() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let txn = Transaction::from_date(date, Money::from_minor_units(-5000), "Groceries");
        assert_eq!(txn.epoch_day, 20_103);
        assert_eq!(txn.date(), Some(date));
    }

    #[test]
    fn test_dates_before_epoch() {
        let date = NaiveDate::from_ymd_opt(1969, 12, 31).unwrap();
        let txn = Transaction::from_date(date, Money::zero(), "");
        assert_eq!(txn.epoch_day, -1);
        assert_eq!(txn.date(), Some(date));
    }

    #[test]
    fn test_out_of_range_day() {
        let txn = Transaction::new(i64::MAX, Money::zero(), "far future");
        assert_eq!(txn.date(), None);
        assert_eq!(txn.to_string(), format!("day {} far future $0.00", i64::MAX));
    }

    #[test]
    fn test_inflow_outflow() {
        let inflow = Transaction::new(0, Money::from_minor_units(1000), "Paycheck");
        assert!(inflow.is_inflow());
        assert!(!inflow.is_outflow());

        let outflow = Transaction::new(0, Money::from_minor_units(-1000), "Rent");
        assert!(!outflow.is_inflow());
        assert!(outflow.is_outflow());
    }

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let txn = Transaction::from_date(date, Money::from_minor_units(-5000), "Test Store");
        assert_eq!(txn.to_string(), "2025-01-15 Test Store -$50.00");
    }

    #[test]
    fn test_wire_layout() {
        let txn = Transaction::new(1, Money::from_minor_units(-2), "T");
        let mut stream = ByteStream::new();
        stream.write_value(&txn);

        let mut expected = vec![1, 0, 0, 0, 0, 0, 0, 0];
        expected.extend_from_slice(&[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        expected.extend_from_slice(&[1, b'T']);
        assert_eq!(stream.to_array(), expected);

        assert_eq!(stream.read_value::<Transaction>().unwrap(), txn);
    }

    #[test]
    fn test_long_title_truncated_on_wire() {
        let txn = Transaction::new(0, Money::zero(), "x".repeat(300));
        let mut stream = ByteStream::new();
        stream.write_value(&txn);

        let decoded: Transaction = stream.read_value().unwrap();
        assert_eq!(decoded.title.len(), 255);
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(20_000, Money::from_minor_units(1234), "Coffee");
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
