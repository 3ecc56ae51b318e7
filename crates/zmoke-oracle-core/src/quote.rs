//! Contract-bound price quotes.
//!
//! A [`Quote`] binds a price and a timestamp to one contract instance. The
//! oracle signs its canonical message (see [`crate::canonical`]) with
//! deterministic Ed25519, so identical inputs always produce identical
//! signatures.
//!
//! Staleness of a quote is an application-level decision and is not checked
//! here.

use serde::{Deserialize, Serialize};

use crate::canonical::{build_message, CANONICAL_MESSAGE_LEN};
use crate::crypto::{Ed25519PublicKey, Ed25519Signature, OracleKeypair};
use crate::error::QuoteError;
use crate::types::ContractId;

/// A price quote for one contract instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// The contract the quote is valid for.
    pub contract_id: ContractId,
    /// Signed 128-bit price. Serialized as a decimal string.
    #[serde(with = "i128_string")]
    pub price: i128,
    /// UNIX timestamp in seconds.
    pub timestamp: u64,
}

impl Quote {
    /// Create a new quote.
    pub const fn new(contract_id: ContractId, price: i128, timestamp: u64) -> Self {
        Self {
            contract_id,
            price,
            timestamp,
        }
    }

    /// The exact bytes that get signed.
    pub fn canonical_message(&self) -> [u8; CANONICAL_MESSAGE_LEN] {
        build_message(self.contract_id.as_bytes(), self.price, self.timestamp)
    }

    /// Sign this quote with the oracle's keypair.
    pub fn sign(&self, keypair: &OracleKeypair) -> SignedQuote {
        SignedQuote {
            quote: *self,
            oracle: keypair.public_key(),
            signature: keypair.sign(&self.canonical_message()),
        }
    }

    /// Check a signature over this quote.
    pub fn verify(&self, public_key: &Ed25519PublicKey, signature: &Ed25519Signature) -> bool {
        public_key.verify(&self.canonical_message(), signature)
    }
}

/// A quote together with the oracle key and signature that authorize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedQuote {
    #[serde(flatten)]
    pub quote: Quote,
    /// The oracle's public key.
    pub oracle: Ed25519PublicKey,
    /// Signature over the quote's canonical message.
    pub signature: Ed25519Signature,
}

impl SignedQuote {
    /// Check the signature against the embedded oracle key.
    pub fn verify(&self) -> bool {
        self.quote.verify(&self.oracle, &self.signature)
    }
}

/// Sign a quote from raw byte arguments.
///
/// The seed must be 32 bytes ([`QuoteError::InvalidSecretKey`] otherwise)
/// and the contract identifier 32 bytes
/// ([`QuoteError::InvalidArgumentLength`] otherwise). The keypair lives only
/// for the duration of this call.
pub fn sign_quote(
    secret_seed: &[u8],
    contract_id: &[u8],
    price: i128,
    timestamp: u64,
) -> Result<Ed25519Signature, QuoteError> {
    let keypair = OracleKeypair::from_seed_slice(secret_seed)?;
    let contract_id = ContractId::try_from(contract_id)?;
    Ok(keypair.sign(&build_message(contract_id.as_bytes(), price, timestamp)))
}

/// Verify a quote signature from raw byte arguments.
///
/// Wrong-length arguments fail with [`QuoteError::InvalidArgumentLength`].
/// Everything past that, including a public key that is not a valid curve
/// point, yields `Ok(false)`.
pub fn verify_quote(
    public_key: &[u8],
    contract_id: &[u8],
    price: i128,
    timestamp: u64,
    signature: &[u8],
) -> Result<bool, QuoteError> {
    let public_key = Ed25519PublicKey::try_from(public_key)?;
    let contract_id = ContractId::try_from(contract_id)?;
    let signature = Ed25519Signature::try_from(signature)?;

    Ok(Quote::new(contract_id, price, timestamp).verify(&public_key, &signature))
}

mod i128_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &i128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ZERO_SEED_UNIT_PRICE_SIG: &str = "10a903d81b0a7ec4bb40f5ff494c69feb2a30bef8c4a76d44e10f50f81bd0a9e\
                                            5aa14132e144f7cdf47e5f5aa93233354af75efe7d3c3ee0f1101bf606714502";

    #[test]
    fn test_zero_seed_signature_is_reproducible() {
        let sig = sign_quote(&[0u8; 32], &[0u8; 32], 1, 0).unwrap();
        assert_eq!(sig.to_hex(), ZERO_SEED_UNIT_PRICE_SIG);

        let public_key = OracleKeypair::from_seed(&[0u8; 32]).public_key();
        assert!(verify_quote(public_key.as_bytes(), &[0u8; 32], 1, 0, sig.as_bytes()).unwrap());
    }

    #[test]
    fn test_sign_rejects_bad_seed_length() {
        assert_eq!(
            sign_quote(&[0u8; 64], &[0u8; 32], 1, 0).unwrap_err(),
            QuoteError::InvalidSecretKey
        );
    }

    #[test]
    fn test_sign_rejects_bad_contract_length() {
        assert_eq!(
            sign_quote(&[0u8; 32], &[0u8; 35], 1, 0).unwrap_err(),
            QuoteError::InvalidArgumentLength {
                field: "contract id",
                expected: 32,
                actual: 35,
            }
        );
    }

    #[test]
    fn test_verify_rejects_structurally_invalid_arguments() {
        let err = verify_quote(&[0u8; 31], &[0u8; 32], 1, 0, &[0u8; 64]).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::InvalidArgumentLength { field: "public key", .. }
        ));

        let err = verify_quote(&[0u8; 32], &[0u8; 32], 1, 0, &[0u8; 63]).unwrap_err();
        assert!(matches!(
            err,
            QuoteError::InvalidArgumentLength { field: "signature", .. }
        ));
    }

    #[test]
    fn test_verify_returns_false_for_garbage_signature() {
        let public_key = OracleKeypair::from_seed(&[7u8; 32]).public_key();
        assert!(!verify_quote(public_key.as_bytes(), &[0u8; 32], 1, 0, &[0xff; 64]).unwrap());
    }

    #[test]
    fn test_signed_quote_json_shape() {
        let keypair = OracleKeypair::from_seed(&[0u8; 32]);
        let signed = Quote::new(ContractId::from_bytes([0u8; 32]), 1, 0).sign(&keypair);

        let json = serde_json::to_value(signed).unwrap();
        assert_eq!(
            json["contract_id"],
            "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4"
        );
        assert_eq!(json["price"], "1");
        assert_eq!(json["timestamp"], 0);
        assert_eq!(json["oracle"], keypair.public_key().to_hex());
        assert_eq!(json["signature"], ZERO_SEED_UNIT_PRICE_SIG);

        let back: SignedQuote = serde_json::from_value(json).unwrap();
        assert_eq!(back, signed);
        assert!(back.verify());
    }

    #[test]
    fn test_quote_bound_to_contract() {
        let keypair = OracleKeypair::from_seed(&[0x42; 32]);
        let signed = Quote::new(ContractId::from_bytes([1u8; 32]), 100, 1_700_000_000).sign(&keypair);

        // Same oracle, same price, different deployment.
        let replayed = Quote::new(ContractId::from_bytes([2u8; 32]), 100, 1_700_000_000);
        assert!(!replayed.verify(&signed.oracle, &signed.signature));
    }

    proptest! {
        #[test]
        fn test_sign_is_deterministic_and_verifies(
            seed in any::<[u8; 32]>(),
            contract_id in any::<[u8; 32]>(),
            price in any::<i128>(),
            timestamp in any::<u64>(),
        ) {
            let s1 = sign_quote(&seed, &contract_id, price, timestamp).unwrap();
            let s2 = sign_quote(&seed, &contract_id, price, timestamp).unwrap();
            prop_assert_eq!(s1, s2);

            let public_key = OracleKeypair::from_seed(&seed).public_key();
            prop_assert!(verify_quote(public_key.as_bytes(), &contract_id, price, timestamp, s1.as_bytes()).unwrap());
        }

        #[test]
        fn test_tampering_is_detected(
            seed in any::<[u8; 32]>(),
            contract_id in any::<[u8; 32]>(),
            price in any::<i128>(),
            timestamp in any::<u64>(),
            byte in 0usize..64,
        ) {
            let sig = sign_quote(&seed, &contract_id, price, timestamp).unwrap();
            let pk = OracleKeypair::from_seed(&seed).public_key();
            let pk = pk.as_bytes();

            let mut other_contract = contract_id;
            other_contract[byte % 32] ^= 0x01;
            prop_assert!(!verify_quote(pk, &other_contract, price, timestamp, sig.as_bytes()).unwrap());
            prop_assert!(!verify_quote(pk, &contract_id, price.wrapping_add(1), timestamp, sig.as_bytes()).unwrap());
            prop_assert!(!verify_quote(pk, &contract_id, price, timestamp.wrapping_add(1), sig.as_bytes()).unwrap());

            let mut other_sig = sig.0;
            other_sig[byte] ^= 0x01;
            prop_assert!(!verify_quote(pk, &contract_id, price, timestamp, &other_sig).unwrap());
        }
    }
}
