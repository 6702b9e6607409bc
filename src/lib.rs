//! budgeteer - binary codec for budget files
//!
//! This library provides the byte-level substrate for reading and writing
//! budget files: a double-ended octet buffer with little-endian integer and
//! short-string encodings, plus the plain value types those files carry.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `codec`: The `ByteStream` buffer and the `Encode`/`Decode` wire traits
//! - `error`: Custom error types
//! - `models`: Budget value types (profile, transactions, ledger)
//! - `storage`: Bulk file loading
//!
//! # Example
//!
//! ```rust
//! use budgeteer::codec::ByteStream;
//!
//! let mut stream = ByteStream::new();
//! stream.append_i32(1);
//! stream.append_string("Java");
//! assert_eq!(stream.read_i32().unwrap(), 1);
//! assert_eq!(stream.read_string().unwrap(), "Java");
//! ```

pub mod codec;
pub mod error;
pub mod models;
pub mod storage;

pub use codec::ByteStream;
pub use error::{BudgeteerError, BudgeteerResult};
