//! Wire forms for values carried in a [`ByteStream`]
//!
//! | Form        | Layout                                      |
//! |-------------|---------------------------------------------|
//! | octet       | 1 byte                                      |
//! | bool        | 1 byte, 0 or 1                              |
//! | int32       | 4 bytes, little-endian                      |
//! | int64       | 8 bytes, little-endian                      |
//! | shortstring | 1 byte unsigned length L, then L bytes UTF-8 |
//!
//! Record types in [`models`](crate::models) implement these traits in terms
//! of the primitives above.

use super::byte_stream::ByteStream;
use crate::error::{BudgeteerError, BudgeteerResult};

/// A value that can be appended to the tail of a stream
pub trait Encode {
    fn encode(&self, stream: &mut ByteStream);
}

/// A value that can be read from the head of a stream
///
/// Implementations may leave the stream partially consumed on error;
/// [`ByteStream::read_value`] puts consumed octets back.
pub trait Decode: Sized {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self>;
}

impl Encode for u8 {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_octet(*self);
    }
}

impl Decode for u8 {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        stream
            .read_one()
            .ok_or_else(|| BudgeteerError::underflow(1, 0))
    }
}

impl Encode for bool {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_octet(u8::from(*self));
    }
}

impl Decode for bool {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        match u8::decode(stream)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(BudgeteerError::Validation(format!(
                "Invalid boolean octet: 0x{:02X}",
                other
            ))),
        }
    }
}

impl Encode for i32 {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_i32(*self);
    }
}

impl Decode for i32 {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        stream.read_i32()
    }
}

impl Encode for i64 {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_i64(*self);
    }
}

impl Decode for i64 {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        stream.read_i64()
    }
}

impl Encode for str {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_string(self);
    }
}

impl Encode for String {
    fn encode(&self, stream: &mut ByteStream) {
        stream.append_string(self);
    }
}

impl Decode for String {
    fn decode(stream: &mut ByteStream) -> BudgeteerResult<Self> {
        stream.read_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_layout() {
        let mut stream = ByteStream::new();
        stream.write_value(&true);
        stream.write_value(&false);
        assert_eq!(stream.to_array(), vec![1, 0]);
        assert!(stream.read_value::<bool>().unwrap());
        assert!(!stream.read_value::<bool>().unwrap());
    }

    #[test]
    fn test_invalid_bool_is_restored() {
        let mut stream = ByteStream::from(vec![2]);
        assert!(stream.read_value::<bool>().unwrap_err().is_validation());
        assert_eq!(stream.to_array(), vec![2]);
    }

    #[test]
    fn test_octet_underflow() {
        let mut stream = ByteStream::new();
        assert!(stream.read_value::<u8>().unwrap_err().is_underflow());
    }

    #[test]
    fn test_primitives_share_layout_with_stream() {
        let mut stream = ByteStream::new();
        stream.write_value(&1i32);
        stream.write_value(&-1i64);
        stream.write_value("Java");

        let mut expected = ByteStream::new();
        expected.append_i32(1);
        expected.append_i64(-1);
        expected.append_string("Java");
        assert_eq!(stream, expected);

        assert_eq!(stream.read_value::<i32>().unwrap(), 1);
        assert_eq!(stream.read_value::<i64>().unwrap(), -1);
        assert_eq!(stream.read_value::<String>().unwrap(), "Java");
    }
}
