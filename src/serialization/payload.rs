//! Cross-chain transition payloads
//!
//! Argument blobs passed as opaque byte strings to bridge contract
//! transitions. Each variable-length field is prefixed with its VarInt
//! length; no field separators or padding.

use crate::error::Result;
use crate::serialization::varint::encode_varint;

/// Serialize the register-asset payload:
/// `varint(len) ‖ asset hash (UTF-8) ‖ varint(len) ‖ native asset hash`.
pub fn serialize_register_asset(asset_hash: &str, native_asset_hash: &[u8]) -> Vec<u8> {
    let asset = asset_hash.as_bytes();

    let mut out = Vec::with_capacity(asset.len() + native_asset_hash.len() + 2);
    out.extend_from_slice(&encode_varint(asset.len() as u64));
    out.extend_from_slice(asset);
    out.extend_from_slice(&encode_varint(native_asset_hash.len() as u64));
    out.extend_from_slice(native_asset_hash);
    out
}

/// Hex-boundary variant of [`serialize_register_asset`]: the native asset
/// hash arrives as hex with optional `0x` prefix, the payload is returned
/// `0x`-prefixed.
///
/// # Errors
///
/// Returns `CodecError::InvalidInput` when the native asset hash is not
/// valid hex.
pub fn serialize_register_asset_hex(asset_hash: &str, native_asset_hash: &str) -> Result<String> {
    let native = crate::hex::decode_hex(native_asset_hash)?;
    Ok(crate::hex::encode_hex(&serialize_register_asset(
        asset_hash, &native,
    )))
}
