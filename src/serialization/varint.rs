//! Variable-length integer encoding/decoding
//!
//! The relay chain uses the Bitcoin-style VarInt scheme for every
//! variable-length field in its wire format: 1-9 bytes depending on the
//! value.
//!
//! Encoding rules:
//! - If value < 0xfd: single byte
//! - If value <= 0xffff: 0xfd prefix + 2 bytes (little-endian)
//! - If value <= 0xffffffff: 0xfe prefix + 4 bytes (little-endian)
//! - Otherwise: 0xff prefix + 8 bytes (little-endian)
//!
//! The receiving bridge contracts re-derive hashes over these exact bytes,
//! so the threshold table must be reproduced exactly.

use crate::error::{CodecError, Result};
use std::borrow::Cow;

/// Error type for VarInt decoding failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarIntError {
    /// Insufficient bytes to decode VarInt
    InsufficientBytes,
    /// Non-minimal encoding: value fits in a shorter form
    NonMinimalEncoding,
}

impl std::fmt::Display for VarIntError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VarIntError::InsufficientBytes => write!(f, "Insufficient bytes to decode VarInt"),
            VarIntError::NonMinimalEncoding => write!(f, "Non-minimal VarInt encoding"),
        }
    }
}

impl std::error::Error for VarIntError {}

/// Encode a u64 value as a VarInt
///
/// # Examples
///
/// ```
/// use bridge_codec::serialization::varint::encode_varint;
///
/// assert_eq!(encode_varint(0), vec![0]);
/// assert_eq!(encode_varint(252), vec![252]);
/// assert_eq!(encode_varint(253), vec![0xfd, 253, 0]);
/// assert_eq!(encode_varint(65536), vec![0xfe, 0, 0, 1, 0]);
/// ```
pub fn encode_varint(value: u64) -> Vec<u8> {
    if value < 0xfd {
        vec![value as u8]
    } else if value <= 0xffff {
        let mut result = vec![0xfd];
        result.extend_from_slice(&(value as u16).to_le_bytes());
        result
    } else if value <= 0xffffffff {
        let mut result = vec![0xfe];
        result.extend_from_slice(&(value as u32).to_le_bytes());
        result
    } else {
        let mut result = vec![0xff];
        result.extend_from_slice(&value.to_le_bytes());
        result
    }
}

/// Number of bytes `encode_varint(value)` produces, without allocating.
pub fn varint_len(value: u64) -> usize {
    if value < 0xfd {
        1
    } else if value <= 0xffff {
        3
    } else if value <= 0xffffffff {
        5
    } else {
        9
    }
}

/// Decode a VarInt from bytes
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Errors
///
/// Returns `CodecError::InvalidInput` when the input is truncated or uses a
/// longer form than the value requires.
///
/// # Examples
///
/// ```
/// use bridge_codec::serialization::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[0]).unwrap(), (0, 1));
/// assert_eq!(decode_varint(&[0xfd, 253, 0]).unwrap(), (253, 3));
/// assert!(decode_varint(&[]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    if data.is_empty() {
        return Err(CodecError::InvalidInput(Cow::Owned(
            VarIntError::InsufficientBytes.to_string(),
        )));
    }

    let first_byte = data[0];

    match first_byte {
        // Single byte encoding
        b if b < 0xfd => Ok((b as u64, 1)),

        // 2-byte encoding (0xfd prefix)
        0xfd => {
            if data.len() < 3 {
                return Err(CodecError::InvalidInput(Cow::Owned(
                    VarIntError::InsufficientBytes.to_string(),
                )));
            }
            let value = u16::from_le_bytes([data[1], data[2]]) as u64;
            if value < 0xfd {
                return Err(CodecError::InvalidInput(Cow::Owned(
                    VarIntError::NonMinimalEncoding.to_string(),
                )));
            }
            Ok((value, 3))
        }

        // 4-byte encoding (0xfe prefix)
        0xfe => {
            if data.len() < 5 {
                return Err(CodecError::InvalidInput(Cow::Owned(
                    VarIntError::InsufficientBytes.to_string(),
                )));
            }
            let value = u32::from_le_bytes([data[1], data[2], data[3], data[4]]) as u64;
            if value <= 0xffff {
                return Err(CodecError::InvalidInput(Cow::Owned(
                    VarIntError::NonMinimalEncoding.to_string(),
                )));
            }
            Ok((value, 5))
        }

        // 8-byte encoding (0xff prefix)
        0xff => {
            if data.len() < 9 {
                return Err(CodecError::InvalidInput(Cow::Owned(
                    VarIntError::InsufficientBytes.to_string(),
                )));
            }
            let value = u64::from_le_bytes([
                data[1], data[2], data[3], data[4], data[5], data[6], data[7], data[8],
            ]);
            if value <= 0xffffffff {
                return Err(CodecError::InvalidInput(Cow::Owned(
                    VarIntError::NonMinimalEncoding.to_string(),
                )));
            }
            Ok((value, 9))
        }

        _ => unreachable!("all byte values covered"),
    }
}
