//! Golden test vectors for deterministic verification.
//!
//! These vectors ensure that strkeys, canonical messages, and signatures are
//! identical across all implementations. [`export_json`] renders them in a
//! form other implementations can load.

use serde::Serialize;

use zmoke_oracle_core::{strkey, ContractId, OracleKeypair, Quote, StrKeyKind};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Oracle seed (test-only key material).
    pub seed: [u8; 32],
    /// Contract the quote is bound to.
    pub contract_id: [u8; 32],
    /// Quote price.
    pub price: i128,
    /// Quote timestamp.
    pub timestamp: u64,
    /// Expected signature (hex).
    pub expected_signature: &'static str,
}

/// Every value derived from a golden vector, hex or strkey encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedVector {
    pub name: String,
    pub secret: String,
    pub account: String,
    pub contract: String,
    pub price: String,
    pub timestamp: u64,
    pub message: String,
    pub signature: String,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "zero seed, zero contract, unit price at epoch",
            seed: [0x00; 32],
            contract_id: [0x00; 32],
            price: 1,
            timestamp: 0,
            expected_signature: "10a903d81b0a7ec4bb40f5ff494c69feb2a30bef8c4a76d44e10f50f81bd0a9e\
                                 5aa14132e144f7cdf47e5f5aa93233354af75efe7d3c3ee0f1101bf606714502",
        },
        GoldenVector {
            name: "1000 XLM in stroops",
            seed: [0x42; 32],
            contract_id: [0xab; 32],
            price: 10_000_000_000,
            timestamp: 1_736_870_400, // 2025-01-14T16:00:00Z
            expected_signature: "95fea15db76bd91af16c17d765c2bb02e909c6dceef6be0f3864ce8f746e529e\
                                 fffa2ec8f57423186b954c2ea5c43beaa8d84ab2b9870c7fe6a653e62a79e60c",
        },
        GoldenVector {
            name: "negative price, max timestamp",
            seed: [0x42; 32],
            contract_id: [0x00; 32],
            price: -5,
            timestamp: u64::MAX,
            expected_signature: "1a52b3515fa06afb189071c9e719b591df77a29df5c1331d029b2dcf377e0891\
                                 f6a6fa112946fc19d24fe0d29ee782fa5d7b8f0c62e947ea28639458adc86b03",
        },
        GoldenVector {
            name: "extreme price",
            seed: [0x01; 32],
            contract_id: [0xff; 32],
            price: i128::MIN,
            timestamp: 1,
            expected_signature: "6b97a3aaaf6dc8be0269d69ab6a284210b9513f46a329cb7aac4c8b3dc5528ce\
                                 5b75b6cb1a3e4c93c7073b10b9efcdb8b7b1ced72dd13ff9fe56c2dfc4d4ad08",
        },
    ]
}

/// Derive every output of a golden vector.
pub fn derive(vector: &GoldenVector) -> DerivedVector {
    let keypair = OracleKeypair::from_seed(&vector.seed);
    let contract_id = ContractId::from_bytes(vector.contract_id);
    let quote = Quote::new(contract_id, vector.price, vector.timestamp);
    let signed = quote.sign(&keypair);

    DerivedVector {
        name: vector.name.to_string(),
        secret: strkey::encode_array(StrKeyKind::SecretSeed, &vector.seed),
        account: keypair.public_key().to_strkey(),
        contract: contract_id.to_strkey(),
        price: vector.price.to_string(),
        timestamp: vector.timestamp,
        message: hex::encode(quote.canonical_message()),
        signature: signed.signature.to_hex(),
    }
}

/// Verify all golden vectors against their pinned signatures.
///
/// Returns `(name, matches, signature_hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let derived = derive(v);
            let matches = derived.signature == v.expected_signature;
            (derived.name, matches, derived.signature)
        })
        .collect()
}

/// Render every derived vector as pretty JSON.
pub fn export_json() -> Result<String, serde_json::Error> {
    let derived: Vec<DerivedVector> = all_vectors().iter().map(derive).collect();
    serde_json::to_string_pretty(&derived)
}
