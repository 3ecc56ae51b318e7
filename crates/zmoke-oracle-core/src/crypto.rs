//! Cryptographic primitives for the Zmoke oracle.
//!
//! Wraps Ed25519 signing with strong types. Public keys and signatures
//! serialize as lowercase hex.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{QuoteError, StrKeyError};
use crate::strkey::{self, StrKeyKind};

/// Length of an Ed25519 secret seed.
pub const SEED_LEN: usize = 32;

/// Length of an Ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of an Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// A 32-byte Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ed25519PublicKey(pub [u8; PUBLIC_KEY_LEN]);

impl Ed25519PublicKey {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; PUBLIC_KEY_LEN];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }

    /// Parse a `G...` account address.
    pub fn from_strkey(s: &str) -> Result<Self, StrKeyError> {
        strkey::decode(s, StrKeyKind::PublicKey).map(Self)
    }

    /// Encode as a `G...` account address.
    pub fn to_strkey(&self) -> String {
        strkey::encode_array(StrKeyKind::PublicKey, &self.0)
    }

    /// Verify a signature over a message.
    ///
    /// Returns `false` for a key that is not a valid curve point as well as
    /// for a signature that does not match.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> bool {
        let Ok(verifying_key) = VerifyingKey::from_bytes(&self.0) else {
            return false;
        };

        let sig = Signature::from_bytes(&signature.0);
        verifying_key.verify(message, &sig).is_ok()
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Pub({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_strkey())
    }
}

impl FromStr for Ed25519PublicKey {
    type Err = StrKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_strkey(s)
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; PUBLIC_KEY_LEN]> for Ed25519PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Ed25519PublicKey {
    type Error = QuoteError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| QuoteError::InvalidArgumentLength {
                field: "public key",
                expected: PUBLIC_KEY_LEN,
                actual: slice.len(),
            })
    }
}

impl Serialize for Ed25519PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Ed25519PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// A 64-byte Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; SIGNATURE_LEN]);

impl Ed25519Signature {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut arr = [0u8; SIGNATURE_LEN];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Self(arr))
    }

    /// The zero signature (invalid, used as placeholder).
    pub const ZERO: Self = Self([0u8; SIGNATURE_LEN]);
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Sig({}...)", &self.to_hex()[..16])
    }
}

impl fmt::Display for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; SIGNATURE_LEN]> for Ed25519Signature {
    fn from(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Ed25519Signature {
    type Error = QuoteError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        slice
            .try_into()
            .map(Self)
            .map_err(|_| QuoteError::InvalidArgumentLength {
                field: "signature",
                expected: SIGNATURE_LEN,
                actual: slice.len(),
            })
    }
}

impl Serialize for Ed25519Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Ed25519Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// The oracle's signing keypair.
///
/// This wraps ed25519-dalek's SigningKey, which zeroizes the secret on drop.
/// The seed is never exposed through `Debug`, `Display` or serialization.
#[derive(Clone)]
pub struct OracleKeypair {
    signing_key: SigningKey,
}

impl OracleKeypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let signing_key = SigningKey::generate(&mut rng);
        Self { signing_key }
    }

    /// Create from a 32-byte seed.
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        Self { signing_key }
    }

    /// Create from a seed slice, which must be exactly 32 bytes.
    pub fn from_seed_slice(seed: &[u8]) -> Result<Self, QuoteError> {
        let seed: &[u8; SEED_LEN] = seed.try_into().map_err(|_| QuoteError::InvalidSecretKey)?;
        Ok(Self::from_seed(seed))
    }

    /// Parse an `S...` secret seed.
    pub fn from_secret(secret: &str) -> Result<Self, QuoteError> {
        let seed = strkey::decode(secret, StrKeyKind::SecretSeed)
            .map_err(|_| QuoteError::InvalidSecretKey)?;
        Ok(Self::from_seed(&seed))
    }

    /// Get the public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        let sig = self.signing_key.sign(message);
        Ed25519Signature(sig.to_bytes())
    }
}

impl fmt::Debug for OracleKeypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OracleKeypair({:?})", self.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_SEED_PUBLIC_KEY: &str =
        "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29";

    #[test]
    fn test_keypair_sign_verify() {
        let keypair = OracleKeypair::generate();
        let message = b"hello world";
        let signature = keypair.sign(message);

        // Valid signature should verify
        assert!(keypair.public_key().verify(message, &signature));

        // Tampered message should fail
        let tampered = b"hello worlD";
        assert!(!keypair.public_key().verify(tampered, &signature));
    }

    #[test]
    fn test_keypair_deterministic_from_seed() {
        let seed = [0x42u8; 32];
        let kp1 = OracleKeypair::from_seed(&seed);
        let kp2 = OracleKeypair::from_seed(&seed);
        assert_eq!(kp1.public_key(), kp2.public_key());
        assert_eq!(kp1.sign(b"quote"), kp2.sign(b"quote"));
    }

    #[test]
    fn test_zero_seed_public_key() {
        let keypair = OracleKeypair::from_seed(&[0u8; 32]);
        assert_eq!(keypair.public_key().to_hex(), ZERO_SEED_PUBLIC_KEY);
        assert_eq!(
            keypair.public_key().to_strkey(),
            "GA5WUJ54Z23KILLCUOUNAKTPBVZWKMQVO4O6EQ5GHLAERIMLLHNCSKYH"
        );
    }

    #[test]
    fn test_from_secret_strkey() {
        let keypair =
            OracleKeypair::from_secret("SBBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEE5BQ")
                .unwrap();
        assert_eq!(
            keypair.public_key().to_strkey(),
            "GAQVF6GRTN4R2JCFGJBOCXZOVNWLPT72PNVF5UYAS6LA4BUYQHNRET46"
        );
    }

    #[test]
    fn test_from_secret_rejects_malformed_input() {
        // Placeholder text, a public key, and a truncated seed.
        for secret in [
            "SDOT...YOUR_ORACLE_SECRET_KEY_HERE",
            "GA5WUJ54Z23KILLCUOUNAKTPBVZWKMQVO4O6EQ5GHLAERIMLLHNCSKYH",
            "SBBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEEQSCIJBEE5B",
        ] {
            assert_eq!(
                OracleKeypair::from_secret(secret).unwrap_err(),
                QuoteError::InvalidSecretKey,
                "{secret}"
            );
        }
    }

    #[test]
    fn test_from_seed_slice_rejects_wrong_length() {
        assert_eq!(
            OracleKeypair::from_seed_slice(&[0u8; 31]).unwrap_err(),
            QuoteError::InvalidSecretKey
        );
        assert!(OracleKeypair::from_seed_slice(&[0u8; 32]).is_ok());
    }

    #[test]
    fn test_keypair_debug_hides_secret() {
        let keypair = OracleKeypair::from_seed(&[0x42; 32]);
        let debug = format!("{:?}", keypair);
        assert!(debug.starts_with("OracleKeypair(Ed25519Pub("));
        assert!(!debug.contains("4242424242"));
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let keypair = OracleKeypair::generate();
        let pk = keypair.public_key();
        let hex = pk.to_hex();
        let recovered = Ed25519PublicKey::from_hex(&hex).unwrap();
        assert_eq!(pk, recovered);
    }

    #[test]
    fn test_invalid_public_key_does_not_verify() {
        // y = 2 is not on the curve.
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        let pk = Ed25519PublicKey(bytes);
        assert!(!pk.verify(b"message", &Ed25519Signature::ZERO));
    }

    #[test]
    fn test_signature_serializes_as_hex() {
        let sig = Ed25519Signature([0xab; 64]);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(64)));
        let back: Ed25519Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }
}
