//! Ledger model
//!
//! An ordered collection of transactions belonging to one user.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::transaction::Transaction;
use crate::codec::{ByteStream, Decode, Encode};
use crate::error::{BudgeteerError, BudgeteerResult};

/// Transactions in insertion order
///
/// Wire form: int32 count followed by that many transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction
    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger has no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate transactions in ledger order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Sum of every transaction amount, saturating at the i64 bounds
    pub fn balance(&self) -> Money {
        self.transactions.iter().map(|t| t.amount).sum()
    }

    /// Sum of every transaction amount, or `None` if it overflows
    pub fn checked_balance(&self) -> Option<Money> {
        self.transactions
            .iter()
            .try_fold(Money::zero(), |acc, t| acc.checked_add(t.amount))
    }

    /// Order by epoch day; transactions on the same day keep their order
    pub fn sort_by_date(&mut self) {
        self.transactions.sort_by_key(|t| t.epoch_day);
    }
}

impl From<Vec<Transaction>> for Ledger {
    fn from(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Encode for Ledger {
    fn encode(&self, stream: &mut ByteStream) {
        // Ledgers beyond i32::MAX entries cannot be described by the count
        let count = i32::try_from(self.transactions.len()).unwrap_or(i32::MAX);
        stream.append_i32(count);
        for transaction in self.transactions.iter().take(count as usize) {
            stream.write_value(transaction);
        }
    }
}

impl Decode for Ledger {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        let count = stream.read_i32()?;
        let count = usize::try_from(count).map_err(|_| {
            BudgeteerError::Validation(format!("Negative transaction count: {}", count))
        })?;

        // Each transaction needs at least 17 octets
        let mut transactions = Vec::with_capacity(count.min(stream.size() / 17));
        for _ in 0..count {
            transactions.push(Transaction::decode(stream)?);
        }
        Ok(Self { transactions })
    }
}
