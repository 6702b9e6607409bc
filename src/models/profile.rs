//! Profile model
//!
//! The name and display preferences of a single user.

use serde::{Deserialize, Serialize};

use crate::codec::{ByteStream, Decode, Encode};
use crate::error::BudgeteerResult;

/// A user's identity and currency/date preferences
///
/// Wire form: shortstring name, shortstring currency symbol, shortstring date
/// format, one octet flag (0 or 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// The user's name
    pub name: String,

    /// Symbol of the preferred currency ($, C$, ¥, £, ...)
    pub currency_symbol: String,

    /// Date template; runs of Y, M and D stand for year, month and day digits
    pub date_format: String,

    /// Whether amounts display with a decimal point ($5.00) or without (¥500)
    pub is_decimal_currency: bool,
}

impl Profile {
    /// Create a profile from its fields
    pub fn new(
        name: impl Into<String>,
        currency_symbol: impl Into<String>,
        date_format: impl Into<String>,
        is_decimal_currency: bool,
    ) -> Self {
        Self {
            name: name.into(),
            currency_symbol: currency_symbol.into(),
            date_format: date_format.into(),
            is_decimal_currency,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("", "$", "YYYY-MM-DD", true)
    }
}

impl Encode for Profile {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_string(&self.name);
        stream.append_string(&self.currency_symbol);
        stream.append_string(&self.date_format);
        stream.write_value(&self.is_decimal_currency);
    }
}

impl Decode for Profile {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        Ok(Self {
            name: stream.read_string()?,
            currency_symbol: stream.read_string()?,
            date_format: stream.read_string()?,
            is_decimal_currency: bool::decode(stream)?,
        })
    }
}
