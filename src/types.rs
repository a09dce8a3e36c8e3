//! Core types for the relay-chain wire format

use serde::{Deserialize, Serialize};

/// Hash type: 256-bit digest, copied onto the wire verbatim
pub type Hash = [u8; 32];

/// Address type: 160-bit digest (`RIPEMD160(SHA256(..))` output width)
pub type Address = [u8; 20];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Length of an uncompressed secp256k1 public key: tag `0x04` + X + Y
pub const UNCOMPRESSED_KEY_LEN: usize = 65;

/// Length of a compressed bookkeeper key entry: 2 reserved bytes + parity byte + X
pub const COMPRESSED_KEY_LEN: usize = 35;

/// Relay-chain block header.
///
/// Field order matches the wire format. Digest fields are opaque byte
/// strings supplied already in wire order; integer fields are serialized
/// little-endian regardless of host byte order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: u32,
    pub chain_id: u64,
    pub prev_block_hash: Hash,
    pub transactions_root: Hash,
    pub cross_states_root: Hash,
    pub block_root: Hash,
    pub timestamp: u32,
    pub height: u32,
    pub consensus_data: u64,
    pub consensus_payload: ByteString,
    pub next_bookkeeper: Address,
}

/// Block header with digest and payload fields still in hex-string form,
/// as handed over by the deployment harness.
///
/// Hex fields accept an optional `0x` prefix. Use [`BlockHeaderHex::parse`]
/// to validate widths and obtain a [`BlockHeader`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeaderHex {
    pub version: u32,
    pub chain_id: u64,
    pub prev_block_hash: String,
    pub transactions_root: String,
    pub cross_states_root: String,
    pub block_root: String,
    pub timestamp: u32,
    pub height: u32,
    pub consensus_data: u64,
    pub consensus_payload: String,
    pub next_bookkeeper: String,
}

impl BlockHeaderHex {
    /// Decode all hex fields and build a [`BlockHeader`].
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidInput` for non-hex content and
    /// `CodecError::MalformedField` when a digest field is not exactly its
    /// fixed width (32 bytes for roots, 20 for `next_bookkeeper`).
    pub fn parse(&self) -> crate::error::Result<BlockHeader> {
        Ok(BlockHeader {
            version: self.version,
            chain_id: self.chain_id,
            prev_block_hash: crate::hex::decode_hex_array(&self.prev_block_hash)?,
            transactions_root: crate::hex::decode_hex_array(&self.transactions_root)?,
            cross_states_root: crate::hex::decode_hex_array(&self.cross_states_root)?,
            block_root: crate::hex::decode_hex_array(&self.block_root)?,
            timestamp: self.timestamp,
            height: self.height,
            consensus_data: self.consensus_data,
            consensus_payload: crate::hex::decode_hex(&self.consensus_payload)?,
            next_bookkeeper: crate::hex::decode_hex_array(&self.next_bookkeeper)?,
        })
    }
}
