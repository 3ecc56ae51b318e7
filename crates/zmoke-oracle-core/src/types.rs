//! Strong type definitions for the Zmoke oracle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{QuoteError, StrKeyError};
use crate::strkey::{self, StrKeyKind, PAYLOAD_LEN};

/// A 32-byte smart contract identifier.
///
/// The only accepted textual form is the `C...` strkey; raw hex is not
/// parsed. Serializes as the strkey.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractId(pub [u8; PAYLOAD_LEN]);

impl ContractId {
    /// Create a new ContractId from raw bytes.
    pub const fn from_bytes(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a `C...` contract address.
    pub fn from_strkey(s: &str) -> Result<Self, StrKeyError> {
        strkey::decode(s, StrKeyKind::Contract).map(Self)
    }

    /// Encode as a `C...` contract address.
    pub fn to_strkey(&self) -> String {
        strkey::encode_array(StrKeyKind::Contract, &self.0)
    }
}

impl fmt::Debug for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractId({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl FromStr for ContractId {
    type Err = StrKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_strkey(s)
    }
}

impl AsRef<[u8]> for ContractId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PAYLOAD_LEN]> for ContractId {
    fn from(bytes: [u8; PAYLOAD_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for ContractId {
    type Error = QuoteError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| QuoteError::InvalidArgumentLength {
                field: "contract id",
                expected: PAYLOAD_LEN,
                actual: slice.len(),
            })
    }
}

impl Serialize for ContractId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_strkey())
    }
}

impl<'de> Deserialize<'de> for ContractId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_strkey(&s).map_err(serde::de::Error::custom)
    }
}
