//! # Zmoke Oracle Testkit
//!
//! Testing utilities for the Zmoke oracle.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known quotes with expected signatures for cross-implementation verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use zmoke_oracle_testkit::vectors::{all_vectors, derive};
//!
//! for vector in all_vectors() {
//!     let derived = derive(&vector);
//!     println!("{}: {}", derived.name, derived.signature);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use zmoke_oracle_testkit::generators::QuoteParams;
//!
//! proptest! {
//!     #[test]
//!     fn signature_is_deterministic(params: QuoteParams) {
//!         let s1 = params.quote.sign(&params.keypair);
//!         let s2 = params.quote.sign(&params.keypair);
//!         prop_assert_eq!(s1, s2);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use zmoke_oracle_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let signed = fixture.make_signed_quote(10_000_000, 1_736_870_400);
//! assert!(signed.verify());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_oracle_fixtures, TestFixture};
pub use generators::QuoteParams;
pub use vectors::{all_vectors, derive, export_json, verify_all_vectors, GoldenVector};
