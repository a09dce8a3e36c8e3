//! # bridge-codec
//!
//! Byte-exact wire-format encoders for the cross-chain messages and
//! consensus artifacts verified by a set of bridge smart contracts.
//!
//! The receiving contracts re-derive hashes and check signatures over the
//! bytes built here, so every encoder must match the relay chain's
//! consensus format exactly: a wrong varint threshold, a byte-swapped
//! integer field or a wrong parity marker silently breaks cross-chain
//! verification.
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every builder is a deterministic, side-effect-free
//!    transformation from input struct to output bytes
//! 2. **Eager Validation**: malformed input is rejected before any output
//!    byte is produced; nothing is truncated or padded
//! 3. **No Hidden State**: no caching, no globals; invocations are
//!    independent and freely parallelizable
//!
//! ## Usage
//!
//! ```rust
//! use bridge_codec::serialization::serialize_block_header;
//! use bridge_codec::types::BlockHeader;
//!
//! let header = BlockHeader {
//!     version: 0,
//!     chain_id: 18,
//!     prev_block_hash: [0u8; 32],
//!     transactions_root: [0u8; 32],
//!     cross_states_root: [0u8; 32],
//!     block_root: [0u8; 32],
//!     timestamp: 0,
//!     height: 1,
//!     consensus_data: 0,
//!     consensus_payload: vec![],
//!     next_bookkeeper: [0u8; 20],
//! };
//! let bytes = serialize_block_header(&header);
//! assert_eq!(bytes.len(), 179);
//! ```

pub mod error;
pub mod hex;
pub mod serialization;
pub mod types;

pub use error::{CodecError, Result};
pub use serialization::{
    bookkeeper_digest, bookkeeper_digest_hex, compress_public_key, decode_varint, encode_varint,
    quorum_threshold, serialize_block_header, serialize_block_header_hex, serialize_bookkeeper,
    serialize_register_asset, serialize_register_asset_hex, varint_len,
};
pub use types::{Address, BlockHeader, BlockHeaderHex, ByteString, Hash};
