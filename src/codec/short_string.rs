//! Length-prefixed UTF-8 strings
//!
//! A short string is one unsigned length octet followed by at most
//! [`MAX_STR_LEN`] octets of UTF-8.

/// Largest encoded length a single length octet can describe
pub const MAX_STR_LEN: usize = u8::MAX as usize;

/// Shorten `s` to at most `max_len` encoded octets by dropping whole code
/// points from the end
pub fn truncate_utf8(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }

    let mut end = max_len;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Decode octets as UTF-8, replacing malformed sequences with U+FFFD
pub fn decode_lossy(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_untouched() {
        assert_eq!(truncate_utf8("Java", MAX_STR_LEN), "Java");
        assert_eq!(truncate_utf8("", MAX_STR_LEN), "");
    }

    #[test]
    fn test_ascii_truncated_to_limit() {
        let long = "a".repeat(300);
        assert_eq!(truncate_utf8(&long, MAX_STR_LEN).len(), 255);
    }

    #[test]
    fn test_never_splits_a_code_point() {
        // 127 two-octet chars = 254 octets, the 128th would cross 255
        let s = "é".repeat(200);
        let cut = truncate_utf8(&s, MAX_STR_LEN);
        assert_eq!(cut.len(), 254);
        assert_eq!(cut.chars().count(), 127);

        // four-octet chars: 63 * 4 = 252
        let s = "🦀".repeat(100);
        assert_eq!(truncate_utf8(&s, MAX_STR_LEN).len(), 252);
    }

    #[test]
    fn test_exact_limit_kept() {
        let s = "x".repeat(255);
        assert_eq!(truncate_utf8(&s, MAX_STR_LEN), s);
    }

    #[test]
    fn test_decode_lossy() {
        assert_eq!(decode_lossy(b"Java".to_vec()), "Java");
        assert_eq!(decode_lossy(vec![0x61, 0xFF, 0x62]), "a\u{FFFD}b");
    }
}
