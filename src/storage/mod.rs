//! Storage layer for budgeteer
//!
//! Loads budget files from disk as raw octets for the codec to consume.

pub mod file_io;

pub use file_io::read_bytes;
