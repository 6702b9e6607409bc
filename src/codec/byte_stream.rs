//! ByteStream: an owned, double-ended buffer of octets
//!
//! Producers grow the stream with `append_*` at the tail and `prepend_*` at the
//! head; consumers shrink it with `read_*` from the head. Multi-octet integers
//! are little-endian and strings are length-prefixed UTF-8 (see
//! [`short_string`](super::short_string)).
//!
//! Every fallible read is all-or-nothing: when it fails the stream is left
//! byte-identical to its state before the call.

use std::collections::VecDeque;
use std::fmt;
use std::path::Path;

use super::short_string::{decode_lossy, truncate_utf8, MAX_STR_LEN};
use super::wire::{Decode, Encode};
use crate::error::{BudgeteerError, BudgeteerResult};
use crate::storage::file_io;

/// A mutable sequence of octets with ordered writes at both ends and
/// destructive reads from the head
#[derive(Default)]
pub struct ByteStream {
    data: VecDeque<u8>,
    /// Octets consumed since the innermost `read_value` began
    journal: Option<Vec<u8>>,
}

impl ByteStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream with room for `capacity` octets
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: VecDeque::with_capacity(capacity),
            journal: None,
        }
    }

    /// Create a stream holding the full contents of the file at `path`
    ///
    /// Any I/O failure, including a missing or empty path, yields an empty
    /// stream. Use [`file_io::read_bytes`] when the failure matters.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match file_io::read_bytes(path) {
            Ok(bytes) => {
                log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
                Self::from(bytes)
            }
            Err(err) => {
                log::warn!("could not load {}: {}", path.display(), err);
                Self::new()
            }
        }
    }

    /// Number of octets currently held
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Check if the stream holds no octets
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy of every octet, head first; the stream is not consumed
    pub fn to_array(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Render as `[0xHH, 0xHH, ...]` for diagnostics
    pub fn debug_render(&self) -> String {
        self.to_string()
    }

    // Reads

    /// Remove and return the head octet, or `None` when empty
    pub fn read_one(&mut self) -> Option<u8> {
        let byte = self.data.pop_front()?;
        if let Some(journal) = self.journal.as_mut() {
            journal.push(byte);
        }
        Some(byte)
    }

    /// Remove and return the first `n` octets in head-to-tail order
    ///
    /// # Errors
    ///
    /// Returns [`BudgeteerError::Underflow`] when fewer than `n` octets are
    /// held; nothing is consumed in that case.
    pub fn read_n(&mut self, n: usize) -> BudgeteerResult<Vec<u8>> {
        self.ensure_available(n)?;
        let bytes: Vec<u8> = self.data.drain(..n).collect();
        if let Some(journal) = self.journal.as_mut() {
            journal.extend_from_slice(&bytes);
        }
        Ok(bytes)
    }

    /// Read a little-endian two's-complement 32-bit integer
    pub fn read_i32(&mut self) -> BudgeteerResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a little-endian two's-complement 64-bit integer
    pub fn read_i64(&mut self) -> BudgeteerResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Read a short string: one unsigned length octet, then that many octets
    /// of UTF-8
    ///
    /// Malformed UTF-8 is replaced rather than rejected. If the stream is
    /// empty or holds fewer octets than the prefix announces, nothing is
    /// consumed, not even the prefix.
    pub fn read_string(&mut self) -> BudgeteerResult<String> {
        let len = match self.data.front() {
            Some(&len) => usize::from(len),
            None => return Err(self.underflow(1)),
        };
        self.ensure_available(len + 1)?;

        self.read_one();
        let bytes = self.read_n(len)?;
        Ok(decode_lossy(bytes))
    }

    // Tail writes

    /// Append one octet at the tail
    pub fn append_octet(&mut self, byte: u8) {
        self.data.push_back(byte);
    }

    /// Append the least significant octet of `i`
    pub fn append_int_low(&mut self, i: i32) {
        self.append_octet(low_octet(i));
    }

    /// Append `bytes` at the tail, in order
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.data.extend(bytes);
    }

    /// Append `bytes`, failing with [`BudgeteerError::NullArgument`] when absent
    pub fn try_append_bytes(&mut self, bytes: Option<&[u8]>) -> BudgeteerResult<()> {
        let bytes = bytes.ok_or(BudgeteerError::NullArgument("bytes"))?;
        self.append_bytes(bytes);
        Ok(())
    }

    /// Append a little-endian 32-bit integer
    pub fn append_i32(&mut self, i: i32) {
        self.append_bytes(&i.to_le_bytes());
    }

    /// Append a little-endian 64-bit integer
    pub fn append_i64(&mut self, l: i64) {
        self.append_bytes(&l.to_le_bytes());
    }

    /// Append `s` as a short string
    ///
    /// Strings longer than [`MAX_STR_LEN`] encoded octets lose whole code
    /// points from the end until they fit.
    pub fn append_string(&mut self, s: &str) {
        let encoded = truncate_utf8(s, MAX_STR_LEN);
        if encoded.len() < s.len() {
            log::debug!(
                "truncated string from {} to {} bytes",
                s.len(),
                encoded.len()
            );
        }
        // truncate_utf8 bounds the length to u8::MAX
        self.append_octet(encoded.len() as u8);
        self.append_bytes(encoded.as_bytes());
    }

    /// Append `s`, failing with [`BudgeteerError::NullArgument`] when absent
    pub fn try_append_string(&mut self, s: Option<&str>) -> BudgeteerResult<()> {
        let s = s.ok_or(BudgeteerError::NullArgument("string"))?;
        self.append_string(s);
        Ok(())
    }

    // Head writes

    /// Insert one octet at the head
    pub fn prepend_octet(&mut self, byte: u8) {
        self.data.push_front(byte);
    }

    /// Prepend the least significant octet of `i`
    pub fn prepend_int_low(&mut self, i: i32) {
        self.prepend_octet(low_octet(i));
    }

    /// Insert `bytes` at the head, keeping their order
    pub fn prepend_bytes(&mut self, bytes: &[u8]) {
        self.data.reserve(bytes.len());
        for &byte in bytes.iter().rev() {
            self.data.push_front(byte);
        }
    }

    /// Prepend `bytes`, failing with [`BudgeteerError::NullArgument`] when absent
    pub fn try_prepend_bytes(&mut self, bytes: Option<&[u8]>) -> BudgeteerResult<()> {
        let bytes = bytes.ok_or(BudgeteerError::NullArgument("bytes"))?;
        self.prepend_bytes(bytes);
        Ok(())
    }

    // Values

    /// Append the wire form of `value`
    pub fn write_value<T: Encode + ?Sized>(&mut self, value: &T) {
        value.encode(self);
    }

    /// Read a value from the head
    ///
    /// If decoding fails part way through, the octets it consumed are put
    /// back so the stream is unchanged.
    pub fn read_value<T: Decode>(&mut self) -> BudgeteerResult<T> {
        let outer = self.journal.replace(Vec::new());
        let result = T::decode(self);
        let consumed = self.journal.take().unwrap_or_default();

        match result {
            Ok(value) => {
                self.journal = outer;
                if let Some(journal) = self.journal.as_mut() {
                    journal.extend_from_slice(&consumed);
                }
                Ok(value)
            }
            Err(err) => {
                self.prepend_bytes(&consumed);
                self.journal = outer;
                Err(err)
            }
        }
    }

    fn read_array<const N: usize>(&mut self) -> BudgeteerResult<[u8; N]> {
        self.ensure_available(N)?;
        let mut out = [0u8; N];
        for (slot, byte) in out.iter_mut().zip(self.data.drain(..N)) {
            *slot = byte;
        }
        if let Some(journal) = self.journal.as_mut() {
            journal.extend_from_slice(&out);
        }
        Ok(out)
    }

    fn ensure_available(&self, requested: usize) -> BudgeteerResult<()> {
        if self.data.len() < requested {
            return Err(self.underflow(requested));
        }
        Ok(())
    }

    fn underflow(&self, requested: usize) -> BudgeteerError {
        log::trace!(
            "underflow: requested {} of {} bytes",
            requested,
            self.data.len()
        );
        BudgeteerError::underflow(requested, self.data.len())
    }
}

fn low_octet(i: i32) -> u8 {
    (i & 0xFF) as u8
}

// A clone starts with no read in flight
impl Clone for ByteStream {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            journal: None,
        }
    }
}

impl PartialEq for ByteStream {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for ByteStream {}

impl fmt::Display for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, byte) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "0x{:02X}", byte)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteStream{}", self)
    }
}

impl From<Vec<u8>> for ByteStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            data: VecDeque::from(bytes),
            journal: None,
        }
    }
}

impl From<&[u8]> for ByteStream {
    fn from(bytes: &[u8]) -> Self {
        bytes.iter().copied().collect()
    }
}

impl From<ByteStream> for Vec<u8> {
    fn from(stream: ByteStream) -> Self {
        stream.data.into()
    }
}

impl FromIterator<u8> for ByteStream {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
            journal: None,
        }
    }
}

impl Extend<u8> for ByteStream {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
