//! # Zmoke Oracle Core
//!
//! Pure primitives for the Zmoke price oracle: strkey addresses and
//! contract-bound quote signatures.
//!
//! This crate contains no I/O, no storage, no networking, and no shared
//! state. Every operation is a pure function of its arguments and safe to
//! call from any number of threads.
//!
//! ## Key Types
//!
//! - [`StrKeyKind`] / [`Address`] - Versioned, checksummed base32 addresses
//! - [`ContractId`] - 32-byte contract identifier (`C...`)
//! - [`Quote`] - Price and timestamp bound to one contract
//! - [`OracleKeypair`] - The oracle's Ed25519 signing key
//!
//! ## Canonical Message
//!
//! Quotes are signed over a fixed 56-byte layout. See [`canonical`] module.

pub mod canonical;
pub mod crypto;
pub mod error;
pub mod quote;
pub mod strkey;
pub mod types;

pub use canonical::{build_message, CANONICAL_MESSAGE_LEN};
pub use crypto::{Ed25519PublicKey, Ed25519Signature, OracleKeypair};
pub use error::{QuoteError, StrKeyError};
pub use quote::{sign_quote, verify_quote, Quote, SignedQuote};
pub use strkey::{Address, StrKeyKind};
pub use types::ContractId;
