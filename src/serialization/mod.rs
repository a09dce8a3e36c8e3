//! Relay-chain wire format serialization
//!
//! This module provides consensus-critical serialization functions that must
//! match the relay chain's wire format byte-for-byte: the bridge contracts
//! re-derive hashes and verify signatures over these exact bytes.
//!
//! All multi-byte integer fields use little-endian byte order; digest fields
//! are copied verbatim in the order supplied.

pub mod bookkeeper;
pub mod header;
pub mod payload;
pub mod varint;

pub use bookkeeper::{
    bookkeeper_digest, bookkeeper_digest_hex, compress_public_key, quorum_threshold,
    serialize_bookkeeper,
};
pub use header::{serialize_block_header, serialize_block_header_hex};
pub use payload::{serialize_register_asset, serialize_register_asset_hex};
pub use varint::{decode_varint, encode_varint, varint_len, VarIntError};
