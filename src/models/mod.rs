//! Value types carried by budget files
//!
//! Plain records: a user's profile, their transactions, and the ledger and
//! budget that group them.

pub mod budget;
pub mod ledger;
pub mod money;
pub mod profile;
pub mod transaction;

pub use budget::Budget;
pub use ledger::Ledger;
pub use money::Money;
pub use profile::Profile;
pub use transaction::Transaction;
