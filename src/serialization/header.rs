//! Block header wire format serialization
//!
//! Relay-chain block header layout, in order:
//! - Version (4 bytes, little-endian)
//! - Chain id (8 bytes, little-endian)
//! - Previous block hash (32 bytes, verbatim)
//! - Transactions root (32 bytes, verbatim)
//! - Cross-states root (32 bytes, verbatim)
//! - Block root (32 bytes, verbatim)
//! - Timestamp (4 bytes, little-endian)
//! - Height (4 bytes, little-endian)
//! - Consensus data (8 bytes, little-endian)
//! - VarInt payload length + consensus payload
//! - Next bookkeeper (20 bytes, verbatim)
//! - Two literal zero bytes
//!
//! The trailer is the count of an always-empty "bookkeepers to notify" list
//! in the source format; it carries no input-derived data.

use crate::serialization::varint::{encode_varint, varint_len};
use crate::types::BlockHeader;

/// Byte length of every fixed-width header field plus the trailer.
const HEADER_FIXED_LEN: usize = 4 + 8 + 32 * 4 + 4 + 4 + 8 + 20 + 2;

/// Serialize a block header to the relay-chain wire format.
///
/// Output length is exactly
/// `174 + varint_len(payload) + payload.len()` bytes.
pub fn serialize_block_header(header: &BlockHeader) -> Vec<u8> {
    let payload = &header.consensus_payload;
    let mut result =
        Vec::with_capacity(HEADER_FIXED_LEN + varint_len(payload.len() as u64) + payload.len());

    result.extend_from_slice(&header.version.to_le_bytes());
    result.extend_from_slice(&header.chain_id.to_le_bytes());
    result.extend_from_slice(&header.prev_block_hash);
    result.extend_from_slice(&header.transactions_root);
    result.extend_from_slice(&header.cross_states_root);
    result.extend_from_slice(&header.block_root);
    result.extend_from_slice(&header.timestamp.to_le_bytes());
    result.extend_from_slice(&header.height.to_le_bytes());
    result.extend_from_slice(&header.consensus_data.to_le_bytes());
    result.extend_from_slice(&encode_varint(payload.len() as u64));
    result.extend_from_slice(payload);
    result.extend_from_slice(&header.next_bookkeeper);
    // Empty bookkeepers-to-notify list count, always literal
    result.extend_from_slice(&[0x00, 0x00]);

    debug_assert_eq!(
        result.len(),
        HEADER_FIXED_LEN + varint_len(payload.len() as u64) + payload.len()
    );
    result
}

/// Serialize a block header and return it as `0x`-prefixed hex, the form
/// submitted as contract call data.
pub fn serialize_block_header_hex(header: &BlockHeader) -> String {
    crate::hex::encode_hex(&serialize_block_header(header))
}
