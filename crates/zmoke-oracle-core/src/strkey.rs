//! Strkey: versioned, checksummed base32 addresses.
//!
//! A strkey is the textual form of 32 bytes of key material as used across
//! the Stellar ecosystem:
//!
//! ```text
//! base32( version_byte(1) || payload(32) || crc16_xmodem_le(2) )
//! ```
//!
//! The base32 alphabet is RFC 4648, uppercase, without padding, so every
//! strkey handled here is exactly 56 characters long. The checksum is
//! CRC-16/XMODEM over the version byte and payload, stored little-endian.
//!
//! Decoding validates in a fixed order (alphabet, length, version byte,
//! checksum) and never falls back to another textual format.

use base32::Alphabet;
use crc::{Crc, CRC_16_XMODEM};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StrKeyError;

/// Length of the key material carried by every supported strkey.
pub const PAYLOAD_LEN: usize = 32;

/// Length of the raw byte form: version byte, payload, checksum.
pub const RAW_LEN: usize = 1 + PAYLOAD_LEN + 2;

/// Length of the textual form (35 bytes in unpadded base32).
pub const ENCODED_LEN: usize = 56;

const XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

fn alphabet() -> Alphabet {
    Alphabet::RFC4648 { padding: false }
}

/// The kind of key material a strkey carries.
///
/// Version bytes follow the ecosystem convention `index << 3`, where `index`
/// is the base32 value of the leading character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrKeyKind {
    /// Ed25519 public key (`G...`).
    PublicKey,
    /// Ed25519 secret seed (`S...`).
    SecretSeed,
    /// Pre-authorized transaction hash (`T...`).
    PreAuthTx,
    /// SHA-256 hash signer (`X...`).
    Sha256Hash,
    /// Smart contract identifier (`C...`).
    Contract,
}

impl StrKeyKind {
    /// Every supported kind.
    pub const ALL: [Self; 5] = [
        Self::PublicKey,
        Self::SecretSeed,
        Self::PreAuthTx,
        Self::Sha256Hash,
        Self::Contract,
    ];

    /// The version byte written in front of the payload.
    pub const fn version_byte(self) -> u8 {
        match self {
            Self::PublicKey => 6 << 3,
            Self::SecretSeed => 18 << 3,
            Self::PreAuthTx => 19 << 3,
            Self::Sha256Hash => 23 << 3,
            Self::Contract => 2 << 3,
        }
    }

    /// Look up a kind by its version byte.
    pub fn from_version_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.version_byte() == byte)
    }

    /// The leading character of every strkey of this kind.
    pub const fn prefix(self) -> char {
        match self {
            Self::PublicKey => 'G',
            Self::SecretSeed => 'S',
            Self::PreAuthTx => 'T',
            Self::Sha256Hash => 'X',
            Self::Contract => 'C',
        }
    }
}

impl fmt::Display for StrKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PublicKey => "public-key",
            Self::SecretSeed => "secret-seed",
            Self::PreAuthTx => "pre-auth-tx",
            Self::Sha256Hash => "sha256-hash",
            Self::Contract => "contract",
        };
        f.write_str(name)
    }
}

/// CRC-16/XMODEM: polynomial 0x1021, initial value 0, no reflection.
pub fn crc16_xmodem(data: &[u8]) -> u16 {
    XMODEM.checksum(data)
}

/// Encode a payload of the given kind.
///
/// Fails with [`StrKeyError::InvalidPayloadLength`] unless `payload` is
/// exactly 32 bytes.
pub fn encode(kind: StrKeyKind, payload: &[u8]) -> Result<String, StrKeyError> {
    let payload: &[u8; PAYLOAD_LEN] = payload
        .try_into()
        .map_err(|_| StrKeyError::InvalidPayloadLength(payload.len()))?;
    Ok(encode_array(kind, payload))
}

/// Encode a fixed-size payload of the given kind.
pub fn encode_array(kind: StrKeyKind, payload: &[u8; PAYLOAD_LEN]) -> String {
    let mut raw = [0u8; RAW_LEN];
    raw[0] = kind.version_byte();
    raw[1..=PAYLOAD_LEN].copy_from_slice(payload);

    let checksum = crc16_xmodem(&raw[..=PAYLOAD_LEN]);
    raw[PAYLOAD_LEN + 1..].copy_from_slice(&checksum.to_le_bytes());

    base32::encode(alphabet(), &raw)
}

/// Decode a strkey, requiring it to be of `expected` kind.
///
/// Returns the 32-byte payload with version byte and checksum stripped.
pub fn decode(text: &str, expected: StrKeyKind) -> Result<[u8; PAYLOAD_LEN], StrKeyError> {
    let raw = decode_raw(text)?;

    if raw[0] != expected.version_byte() {
        return Err(StrKeyError::InvalidVersionByte {
            expected: Some(expected),
            actual: raw[0],
        });
    }

    verify_checksum(&raw)?;
    Ok(payload_of(&raw))
}

/// Decode a strkey of any supported kind.
pub fn decode_any(text: &str) -> Result<Address, StrKeyError> {
    let raw = decode_raw(text)?;

    let kind = StrKeyKind::from_version_byte(raw[0]).ok_or(StrKeyError::InvalidVersionByte {
        expected: None,
        actual: raw[0],
    })?;

    verify_checksum(&raw)?;
    Ok(Address::new(kind, payload_of(&raw)))
}

/// Whether `text` is a valid strkey of the given kind.
pub fn is_valid(text: &str, kind: StrKeyKind) -> bool {
    decode(text, kind).is_ok()
}

/// Check the alphabet and length, then base32-decode to the raw 35 bytes.
fn decode_raw(text: &str) -> Result<[u8; RAW_LEN], StrKeyError> {
    // The base32 crate accepts lowercase and padding; strkeys allow neither.
    if let Some(c) = text.chars().find(|&c| !matches!(c, 'A'..='Z' | '2'..='7')) {
        return Err(StrKeyError::InvalidEncoding(c));
    }

    let length_error = StrKeyError::InvalidLength {
        expected: ENCODED_LEN,
        actual: text.len(),
    };
    if text.len() != ENCODED_LEN {
        return Err(length_error);
    }

    let bytes = base32::decode(alphabet(), text).ok_or_else(|| length_error.clone())?;
    bytes.as_slice().try_into().map_err(|_| length_error)
}

fn verify_checksum(raw: &[u8; RAW_LEN]) -> Result<(), StrKeyError> {
    let expected = crc16_xmodem(&raw[..=PAYLOAD_LEN]);
    let actual = u16::from_le_bytes([raw[RAW_LEN - 2], raw[RAW_LEN - 1]]);

    if expected != actual {
        return Err(StrKeyError::InvalidChecksum { expected, actual });
    }
    Ok(())
}

fn payload_of(raw: &[u8; RAW_LEN]) -> [u8; PAYLOAD_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&raw[1..=PAYLOAD_LEN]);
    payload
}

/// A decoded strkey: its kind and 32-byte payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    kind: StrKeyKind,
    payload: [u8; PAYLOAD_LEN],
}

impl Address {
    /// Create from a kind and raw payload.
    pub const fn new(kind: StrKeyKind, payload: [u8; PAYLOAD_LEN]) -> Self {
        Self { kind, payload }
    }

    /// The kind of key material.
    pub const fn kind(&self) -> StrKeyKind {
        self.kind
    }

    /// The raw payload.
    pub const fn payload(&self) -> &[u8; PAYLOAD_LEN] {
        &self.payload
    }

    /// Encode back to the textual form.
    pub fn to_strkey(&self) -> String {
        encode_array(self.kind, &self.payload)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StrKeyKind::SecretSeed => write!(f, "Address({}, <redacted>)", self.kind),
            kind => write!(
                f,
                "Address({}, {})",
                kind,
                &hex::encode(self.payload)[..16]
            ),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl FromStr for Address {
    type Err = StrKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_any(s)
    }
}
