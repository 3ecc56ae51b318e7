//! Canonical quote message.
//!
//! The signed message is a fixed 56-byte layout:
//!
//! ```text
//! contract_id(32) || price_be(16) || timestamp_be(8)
//! ```
//!
//! There are no length prefixes, separators, type tags or version field.
//! Both numeric fields are big-endian. Binding the contract identifier into
//! the message ties a quote to one contract deployment. Any change to field
//! order or width invalidates every quote signed before it.

use crate::strkey::PAYLOAD_LEN;

/// Byte offset of the contract identifier.
pub const CONTRACT_ID_OFFSET: usize = 0;

/// Byte offset of the big-endian `i128` price.
pub const PRICE_OFFSET: usize = CONTRACT_ID_OFFSET + PAYLOAD_LEN;

/// Byte offset of the big-endian `u64` timestamp.
pub const TIMESTAMP_OFFSET: usize = PRICE_OFFSET + 16;

/// Total length of the canonical message.
pub const CANONICAL_MESSAGE_LEN: usize = TIMESTAMP_OFFSET + 8;

/// Build the canonical message for a quote.
pub fn build_message(
    contract_id: &[u8; PAYLOAD_LEN],
    price: i128,
    timestamp: u64,
) -> [u8; CANONICAL_MESSAGE_LEN] {
    let mut buf = [0u8; CANONICAL_MESSAGE_LEN];
    buf[CONTRACT_ID_OFFSET..PRICE_OFFSET].copy_from_slice(contract_id);
    buf[PRICE_OFFSET..TIMESTAMP_OFFSET].copy_from_slice(&price.to_be_bytes());
    buf[TIMESTAMP_OFFSET..].copy_from_slice(&timestamp.to_be_bytes());
    buf
}
