//! Proptest generators for property-based testing.

use proptest::prelude::*;

use zmoke_oracle_core::{
    Address, ContractId, Ed25519PublicKey, OracleKeypair, Quote, StrKeyKind,
};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = OracleKeypair> {
    any::<[u8; 32]>().prop_map(|seed| OracleKeypair::from_seed(&seed))
}

/// Generate a random Ed25519PublicKey.
pub fn public_key() -> impl Strategy<Value = Ed25519PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate a random ContractId.
pub fn contract_id() -> impl Strategy<Value = ContractId> {
    any::<[u8; 32]>().prop_map(ContractId::from_bytes)
}

/// Generate a StrKeyKind.
pub fn strkey_kind() -> impl Strategy<Value = StrKeyKind> {
    prop_oneof![
        Just(StrKeyKind::PublicKey),
        Just(StrKeyKind::SecretSeed),
        Just(StrKeyKind::PreAuthTx),
        Just(StrKeyKind::Sha256Hash),
        Just(StrKeyKind::Contract),
    ]
}

/// Generate an address of any kind.
pub fn address() -> impl Strategy<Value = Address> {
    (strkey_kind(), any::<[u8; 32]>()).prop_map(|(kind, payload)| Address::new(kind, payload))
}

/// Generate a price, biased towards the edges of the `i128` range.
pub fn price() -> impl Strategy<Value = i128> {
    prop_oneof![
        Just(0i128),
        Just(1i128),
        Just(-1i128),
        Just(i128::MIN),
        Just(i128::MAX),
        any::<i128>(),
    ]
}

/// Generate a timestamp, biased towards the edges of the `u64` range.
pub fn timestamp() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0u64), Just(u64::MAX), any::<u64>()]
}

/// Parameters for generating a signed quote.
#[derive(Debug, Clone)]
pub struct QuoteParams {
    pub keypair: OracleKeypair,
    pub quote: Quote,
}

impl Arbitrary for QuoteParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (keypair(), contract_id(), price(), timestamp())
            .prop_map(|(keypair, contract_id, price, timestamp)| QuoteParams {
                keypair,
                quote: Quote::new(contract_id, price, timestamp),
            })
            .boxed()
    }
}
