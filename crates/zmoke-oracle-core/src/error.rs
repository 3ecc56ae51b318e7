//! Error types for the Zmoke oracle core.

use thiserror::Error;

use crate::strkey::StrKeyKind;

/// Errors produced by the strkey codec.
///
/// Every variant names one validation step, so callers can tell malformed
/// input apart from a well-formed address of the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrKeyError {
    #[error("invalid strkey encoding: character {0:?} is outside the base32 alphabet")]
    InvalidEncoding(char),

    #[error("invalid strkey length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// `expected` is `None` when any known kind would have been accepted.
    #[error("invalid version byte {actual:#04x} (expected {expected:?})")]
    InvalidVersionByte {
        expected: Option<StrKeyKind>,
        actual: u8,
    },

    #[error("invalid checksum: expected {expected:#06x}, got {actual:#06x}")]
    InvalidChecksum { expected: u16, actual: u16 },

    #[error("invalid payload length: expected 32 bytes, got {0}")]
    InvalidPayloadLength(usize),
}

/// Errors produced while signing or verifying a quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("invalid {field} length: expected {expected} bytes, got {actual}")]
    InvalidArgumentLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("address error: {0}")]
    Address(#[from] StrKeyError),
}
