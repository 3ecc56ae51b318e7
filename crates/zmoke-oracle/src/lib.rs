//! # Zmoke Oracle
//!
//! Tooling for the Zmoke price oracle: decode strkey addresses and sign
//! price quotes bound to one smart-contract instance.
//!
//! ## Overview
//!
//! - **Addresses**: Versioned, checksummed base32 strkeys (`G...`, `C...`, `S...`)
//! - **Quotes**: `contract_id || price || timestamp`, signed with deterministic Ed25519
//!
//! ## Usage
//!
//! ```rust
//! use zmoke_oracle::{ContractId, OracleKeypair, Quote};
//!
//! let keypair = OracleKeypair::from_seed(&[0u8; 32]);
//! let contract: ContractId = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4"
//!     .parse()
//!     .unwrap();
//!
//! let signed = Quote::new(contract, 1, 0).sign(&keypair);
//! assert!(signed.verify());
//! ```
//!
//! ## Binaries
//!
//! - `strkey-decode <ADDRESS>` prints the 32-byte payload as hex
//! - `sign-quote` prints a signed quote; see [`config::SignArgs`]

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

// Re-export the core crate
pub use zmoke_oracle_core as core;

pub use config::{DecodeArgs, KindArg, OutputFormat, SignArgs, SignerConfig};
pub use error::{OracleError, Result};

// Re-export commonly used core types
pub use zmoke_oracle_core::{
    Address, ContractId, Ed25519PublicKey, Ed25519Signature, OracleKeypair, Quote, QuoteError,
    SignedQuote, StrKeyError, StrKeyKind,
};
