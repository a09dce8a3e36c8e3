//! Bookkeeper (validator set) commitment
//!
//! The relay chain identifies a validator set by a 20-byte digest over a
//! canonical byte stream:
//!
//! `n (u16 LE) ‖ { varint(35) ‖ compressed key (35 bytes) }* ‖ m (u16 LE)`
//!
//! hashed as `RIPEMD160(SHA256(stream))`. The key count fields are fixed
//! 2-byte little-endian, not varints; key order is caller-supplied and
//! preserved, so the digest commits to an ordered list, not a set.

use crate::error::{CodecError, Result};
use crate::serialization::varint::encode_varint;
use crate::types::{Address, COMPRESSED_KEY_LEN, UNCOMPRESSED_KEY_LEN};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use std::borrow::Cow;

/// Compress a 65-byte uncompressed public key into its 35-byte wire entry.
///
/// The entry is the first 35 bytes of the uncompressed key with byte index 2
/// replaced by the Y-parity marker: `0x02` when the low bit of the key's
/// final byte is 0, `0x03` otherwise. The parity comes from the last byte of
/// the full 65-byte key, not of the truncated copy.
///
/// # Errors
///
/// Returns `CodecError::MalformedKey` when the key is not exactly 65 bytes.
pub fn compress_public_key(key: &[u8]) -> Result<[u8; COMPRESSED_KEY_LEN]> {
    if key.len() != UNCOMPRESSED_KEY_LEN {
        return Err(CodecError::MalformedKey(Cow::Owned(format!(
            "uncompressed public key must be {UNCOMPRESSED_KEY_LEN} bytes, got {}",
            key.len()
        ))));
    }

    let mut entry = [0u8; COMPRESSED_KEY_LEN];
    entry.copy_from_slice(&key[..COMPRESSED_KEY_LEN]);

    let y_low_bit_clear = key[UNCOMPRESSED_KEY_LEN - 1] % 2 == 0;
    entry[2] = if y_low_bit_clear { 0x02 } else { 0x03 };

    Ok(entry)
}

/// Byzantine-fault-tolerant quorum threshold: `m = n - floor((n - 1) / 3)`.
///
/// Integer floor division; for `n = 1, 4, 7, 10` this yields `1, 3, 5, 7`.
pub fn quorum_threshold(n: usize) -> usize {
    n - (n - 1) / 3
}

/// Serialize the canonical bookkeeper byte stream (the pre-image of
/// [`bookkeeper_digest`]).
///
/// # Errors
///
/// Returns `CodecError::InvalidInput` for an empty key list (a quorum of
/// zero keys is meaningless) or a key count outside the u16 range, and
/// `CodecError::MalformedKey` for any key that is not exactly 65 bytes.
pub fn serialize_bookkeeper<K: AsRef<[u8]>>(pubkeys: &[K]) -> Result<Vec<u8>> {
    if pubkeys.is_empty() {
        return Err(CodecError::InvalidInput(Cow::Borrowed(
            "bookkeeper requires at least one public key",
        )));
    }

    let n = pubkeys.len();
    let n_u16: u16 = n.try_into().map_err(|_| {
        CodecError::InvalidInput(Cow::Owned(format!(
            "bookkeeper key count {n} exceeds the u16 wire field"
        )))
    })?;
    // m <= n, so it fits whenever n does
    let m_u16 = quorum_threshold(n) as u16;

    let mut out = Vec::with_capacity(2 + n * (1 + COMPRESSED_KEY_LEN) + 2);
    out.extend_from_slice(&n_u16.to_le_bytes());
    for key in pubkeys {
        let entry = compress_public_key(key.as_ref())?;
        out.extend_from_slice(&encode_varint(COMPRESSED_KEY_LEN as u64));
        out.extend_from_slice(&entry);
    }
    out.extend_from_slice(&m_u16.to_le_bytes());

    Ok(out)
}

/// Compute the 20-byte validator-set commitment:
/// `RIPEMD160(SHA256(serialize_bookkeeper(pubkeys)))`.
///
/// # Errors
///
/// Propagates the validation errors of [`serialize_bookkeeper`].
pub fn bookkeeper_digest<K: AsRef<[u8]>>(pubkeys: &[K]) -> Result<Address> {
    let stream = serialize_bookkeeper(pubkeys)?;
    let sha = Sha256::digest(&stream);
    let digest = Ripemd160::digest(sha);

    let mut out = [0u8; 20];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// Hex-boundary variant of [`bookkeeper_digest`]: accepts keys as hex
/// strings with optional `0x` prefix, returns the digest `0x`-prefixed.
pub fn bookkeeper_digest_hex<S: AsRef<str>>(pubkeys: &[S]) -> Result<String> {
    let keys: Vec<Vec<u8>> = pubkeys
        .iter()
        .map(|s| crate::hex::decode_hex(s.as_ref()))
        .collect::<Result<_>>()?;
    Ok(crate::hex::encode_hex(&bookkeeper_digest(&keys)?))
}
