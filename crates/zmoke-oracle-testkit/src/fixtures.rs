//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use zmoke_oracle_core::{
    strkey, ContractId, Ed25519PublicKey, OracleKeypair, Quote, SignedQuote, StrKeyKind,
};

/// A test fixture with an oracle keypair and the contract it quotes for.
pub struct TestFixture {
    pub keypair: OracleKeypair,
    pub contract_id: ContractId,
    seed: [u8; 32],
}

impl TestFixture {
    /// Create a new test fixture with a random keypair and contract.
    pub fn new() -> Self {
        let seed = rand::random::<[u8; 32]>();
        Self {
            keypair: OracleKeypair::from_seed(&seed),
            contract_id: ContractId::from_bytes(rand::random()),
            seed,
        }
    }

    /// Create with a deterministic keypair and contract derived from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        let mut contract = seed;
        contract.reverse();
        Self {
            keypair: OracleKeypair::from_seed(&seed),
            contract_id: ContractId::from_bytes(contract),
            seed,
        }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// The oracle secret as an `S...` strkey, as a caller would configure it.
    pub fn secret_strkey(&self) -> String {
        strkey::encode_array(StrKeyKind::SecretSeed, &self.seed)
    }

    /// The raw seed.
    pub fn seed(&self) -> &[u8; 32] {
        &self.seed
    }

    /// Build a quote for this fixture's contract.
    pub fn quote(&self, price: i128, timestamp: u64) -> Quote {
        Quote::new(self.contract_id, price, timestamp)
    }

    /// Build and sign a quote for this fixture's contract.
    pub fn make_signed_quote(&self, price: i128, timestamp: u64) -> SignedQuote {
        self.quote(price, timestamp).sign(&self.keypair)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures, one per oracle.
pub fn multi_oracle_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_signs_valid_quotes() {
        let fixture = TestFixture::new();
        let signed = fixture.make_signed_quote(42, 1_700_000_000);

        assert!(signed.verify());
        assert_eq!(signed.oracle, fixture.public_key());
        assert_eq!(signed.quote.contract_id, fixture.contract_id);
    }

    #[test]
    fn test_secret_strkey_roundtrip() {
        let fixture = TestFixture::with_seed([0x42; 32]);
        let keypair = OracleKeypair::from_secret(&fixture.secret_strkey()).unwrap();
        assert_eq!(keypair.public_key(), fixture.public_key());
    }

    #[test]
    fn test_multi_oracle_beyond_one_byte() {
        let oracles = multi_oracle_fixtures(300);
        let unique: HashSet<_> = oracles.iter().map(|o| o.public_key()).collect();
        assert_eq!(unique.len(), 300);
    }

    #[test]
    fn test_multi_oracle() {
        let oracles = multi_oracle_fixtures(3);

        // Each oracle has unique keys
        let pks: Vec<_> = oracles.iter().map(|o| o.public_key()).collect();
        assert_ne!(pks[0], pks[1]);
        assert_ne!(pks[1], pks[2]);
        assert_ne!(pks[0], pks[2]);

        // A quote from one oracle does not verify under another
        let signed = oracles[0].make_signed_quote(1, 1);
        assert!(!signed.quote.verify(&pks[1], &signed.signature));
    }
}
