//! Hex string boundary utilities
//!
//! Digests, keys and payloads cross the harness boundary as hex strings
//! with an optional `0x` prefix; outputs are returned `0x`-prefixed
//! lowercase to match what the bridge contracts expect as call data.

use crate::error::{CodecError, Result};
use std::borrow::Cow;

/// Strip a single leading `0x`/`0X` prefix, if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode a hex string with optional `0x` prefix into bytes.
///
/// # Errors
///
/// Returns `CodecError::InvalidInput` for odd-length or non-hex content.
pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(strip_hex_prefix(s))
        .map_err(|e| CodecError::InvalidInput(Cow::Owned(format!("invalid hex string: {e}"))))
}

/// Decode a hex string into a fixed-width byte array.
///
/// # Errors
///
/// Returns `CodecError::InvalidInput` for non-hex content and
/// `CodecError::MalformedField` when the decoded width is not exactly `N`.
pub fn decode_hex_array<const N: usize>(s: &str) -> Result<[u8; N]> {
    let bytes = decode_hex(s)?;
    let got = bytes.len();
    bytes.try_into().map_err(|_| {
        CodecError::MalformedField(Cow::Owned(format!(
            "expected {N}-byte field, got {got} bytes"
        )))
    })
}

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix_variants() {
        assert_eq!(strip_hex_prefix("0xdead"), "dead");
        assert_eq!(strip_hex_prefix("0Xdead"), "dead");
        assert_eq!(strip_hex_prefix("dead"), "dead");
        assert_eq!(strip_hex_prefix(""), "");
    }

    #[test]
    fn test_decode_hex_optional_prefix() {
        assert_eq!(decode_hex("0x0102").unwrap(), vec![1, 2]);
        assert_eq!(decode_hex("0102").unwrap(), vec![1, 2]);
        assert_eq!(decode_hex("0x").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_rejects_garbage() {
        assert!(matches!(decode_hex("0xg1"), Err(CodecError::InvalidInput(_))));
        // Odd-length input has no byte interpretation
        assert!(matches!(decode_hex("abc"), Err(CodecError::InvalidInput(_))));
    }

    #[test]
    fn test_decode_hex_array_width() {
        let arr: [u8; 4] = decode_hex_array("0xdeadbeef").unwrap();
        assert_eq!(arr, [0xde, 0xad, 0xbe, 0xef]);
        assert!(matches!(
            decode_hex_array::<4>("0xdeadbe"),
            Err(CodecError::MalformedField(_))
        ));
        assert!(matches!(
            decode_hex_array::<4>("0xdeadbeef00"),
            Err(CodecError::MalformedField(_))
        ));
    }

    #[test]
    fn test_encode_hex_round_trip() {
        let bytes = [0u8, 1, 0xab, 0xff];
        let encoded = encode_hex(&bytes);
        assert_eq!(encoded, "0x0001abff");
        assert_eq!(decode_hex(&encoded).unwrap(), bytes);
    }
}
