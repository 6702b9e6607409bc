//! Binary codec for budget data
//!
//! This module provides the [`ByteStream`] buffer and the wire forms built on
//! it: octets, little-endian integers and length-prefixed UTF-8 strings.

pub mod byte_stream;
pub mod short_string;
pub mod wire;

pub use byte_stream::ByteStream;
pub use short_string::MAX_STR_LEN;
pub use wire::{Decode, Encode};
