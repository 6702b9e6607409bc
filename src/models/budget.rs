//! Budget model
//!
//! Pairs a user's profile with their ledger so both travel as a unit.

use serde::{Deserialize, Serialize};
use std::io::Write;

use super::ledger::Ledger;
use super::profile::Profile;
use crate::error::BudgeteerResult;

/// A user's profile and ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub profile: Profile,
    pub ledger: Ledger,
}

impl Budget {
    /// Create a budget from its parts
    pub fn new(profile: Profile, ledger: Ledger) -> Self {
        Self { profile, ledger }
    }

    /// Get the user's profile
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Get the ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Get the ledger for modification
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Current balance, formatted with the profile's currency
    pub fn formatted_balance(&self) -> String {
        self.ledger.balance().format(&self.profile)
    }

    /// Render as JSON for inspection
    pub fn to_json(&self, pretty: bool) -> BudgeteerResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }?;
        Ok(json)
    }

    /// Write the JSON form to `writer`
    pub fn write_json<W: Write>(&self, writer: &mut W, pretty: bool) -> BudgeteerResult<()> {
        if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        }?;
        Ok(())
    }

    /// Parse a budget from its JSON form
    pub fn from_json(json_str: &str) -> BudgeteerResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}
