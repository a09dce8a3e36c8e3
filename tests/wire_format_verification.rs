//! Little-endian serialization verification tests
//!
//! Verifies that every multi-byte integer field is serialized in
//! little-endian byte order and every digest field is copied verbatim,
//! matching the relay chain's wire format.
//!
//! Consensus-critical: endianness differences = failed cross-chain
//! verification on the receiving contracts.

use bridge_codec::serialization::{encode_varint, serialize_block_header, serialize_bookkeeper};
use bridge_codec::types::BlockHeader;

fn base_header() -> BlockHeader {
    BlockHeader {
        version: 0,
        chain_id: 0,
        prev_block_hash: [0u8; 32],
        transactions_root: [0u8; 32],
        cross_states_root: [0u8; 32],
        block_root: [0u8; 32],
        timestamp: 0,
        height: 0,
        consensus_data: 0,
        consensus_payload: vec![],
        next_bookkeeper: [0u8; 20],
    }
}

/// Test that the header version is serialized in little-endian
#[test]
fn test_header_version_little_endian() {
    // Version 0x01020304 should serialize as [0x04, 0x03, 0x02, 0x01]
    let mut header = base_header();
    header.version = 0x01020304;

    let serialized = serialize_block_header(&header);

    assert_eq!(
        &serialized[..4],
        &[0x04, 0x03, 0x02, 0x01],
        "Version must be little-endian"
    );
}

/// Test that the chain id is serialized in little-endian
#[test]
fn test_header_chain_id_little_endian() {
    let mut header = base_header();
    header.chain_id = 0x0102030405060708;

    let serialized = serialize_block_header(&header);

    assert_eq!(
        &serialized[4..12],
        &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01],
        "Chain id must be little-endian"
    );
}

/// Test that timestamp, height and consensus data are little-endian
#[test]
fn test_header_trailing_integers_little_endian() {
    let mut header = base_header();
    header.timestamp = 0x0a0b0c0d;
    header.height = 0x01020304;
    header.consensus_data = 0x1112131415161718;

    let serialized = serialize_block_header(&header);

    assert_eq!(&serialized[140..144], &[0x0d, 0x0c, 0x0b, 0x0a]);
    assert_eq!(&serialized[144..148], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(
        &serialized[148..156],
        &[0x18, 0x17, 0x16, 0x15, 0x14, 0x13, 0x12, 0x11]
    );
}

/// Test that all four roots are copied verbatim, with no byte-swapping
#[test]
fn test_header_roots_copied_verbatim() {
    let mut header = base_header();
    header.prev_block_hash = [0x01; 32];
    header.transactions_root = [0x02; 32];
    header.cross_states_root = [0x03; 32];
    header.block_root = [0x04; 32];

    let serialized = serialize_block_header(&header);

    assert_eq!(&serialized[12..44], &[0x01; 32]);
    assert_eq!(&serialized[44..76], &[0x02; 32]);
    assert_eq!(&serialized[76..108], &[0x03; 32]);
    assert_eq!(&serialized[108..140], &[0x04; 32]);
}

/// Test that an asymmetric root keeps its supplied byte order
#[test]
fn test_header_root_byte_order_preserved() {
    let mut root = [0u8; 32];
    root[0] = 0xde;
    root[31] = 0xad;

    let mut header = base_header();
    header.prev_block_hash = root;

    let serialized = serialize_block_header(&header);

    assert_eq!(serialized[12], 0xde, "First root byte must stay first");
    assert_eq!(serialized[43], 0xad, "Last root byte must stay last");
}

/// Test that the two-byte zero trailer is always present
#[test]
fn test_header_trailer_always_zero() {
    let mut header = base_header();
    header.consensus_payload = vec![0xff; 17];
    header.next_bookkeeper = [0xff; 20];

    let serialized = serialize_block_header(&header);

    assert_eq!(&serialized[serialized.len() - 2..], &[0x00, 0x00]);
}

/// Test that varint multi-byte forms are little-endian
#[test]
fn test_varint_payload_little_endian() {
    assert_eq!(encode_varint(0x0102), vec![0xfd, 0x02, 0x01]);
    assert_eq!(encode_varint(0x01020304), vec![0xfe, 0x04, 0x03, 0x02, 0x01]);
    assert_eq!(
        encode_varint(0x0102030405060708),
        vec![0xff, 0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]
    );
}

/// Test that bookkeeper count fields are fixed 2-byte little-endian,
/// not varints
#[test]
fn test_bookkeeper_count_fields_fixed_u16_le() {
    let key: Vec<u8> = {
        let mut k = vec![0u8; 65];
        k[0] = 0x04;
        k
    };
    // 300 keys forces a count that a varint would encode differently
    let keys = vec![key; 300];

    let stream = serialize_bookkeeper(&keys).unwrap();

    // n = 300 = 0x012c as plain u16 LE, no 0xfd marker
    assert_eq!(&stream[..2], &[0x2c, 0x01]);
    // m = 300 - 299/3 = 201 = 0xc9
    assert_eq!(&stream[stream.len() - 2..], &[0xc9, 0x00]);
}
