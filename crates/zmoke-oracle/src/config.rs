//! Command-line configuration for the oracle tools.
//!
//! Every option of `sign-quote` can also come from the environment, so the
//! oracle secret never has to appear on a command line.

use clap::{Parser, ValueEnum};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use zmoke_oracle_core::{ContractId, OracleKeypair, StrKeyKind};

use crate::error::{OracleError, Result};

/// Which kind of address `strkey-decode` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    PublicKey,
    SecretSeed,
    PreAuthTx,
    Sha256Hash,
    Contract,
    /// Any supported kind, detected from the version byte.
    Any,
}

impl KindArg {
    /// The strkey kind to require, or `None` for [`KindArg::Any`].
    pub fn strkey_kind(self) -> Option<StrKeyKind> {
        match self {
            Self::PublicKey => Some(StrKeyKind::PublicKey),
            Self::SecretSeed => Some(StrKeyKind::SecretSeed),
            Self::PreAuthTx => Some(StrKeyKind::PreAuthTx),
            Self::Sha256Hash => Some(StrKeyKind::Sha256Hash),
            Self::Contract => Some(StrKeyKind::Contract),
            Self::Any => None,
        }
    }
}

impl fmt::Display for KindArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// Output format of `sign-quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Decode a strkey address and print its 32-byte payload as hex.
#[derive(Parser, Debug)]
#[command(name = "strkey-decode", version, about, long_about = None)]
pub struct DecodeArgs {
    /// The address to decode (e.g. a G... account address)
    pub address: String,

    /// Kind of address to accept
    #[arg(short, long, value_enum, default_value_t = KindArg::PublicKey)]
    pub kind: KindArg,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

/// Sign a price quote bound to one contract instance.
#[derive(Parser, Debug)]
#[command(name = "sign-quote", version, about, long_about = None)]
pub struct SignArgs {
    /// Oracle secret seed (S...)
    #[arg(long, env = "ZMOKE_ORACLE_SECRET", hide_env_values = true)]
    pub secret: String,

    /// Contract address the quote is bound to (C...)
    #[arg(long, env = "ZMOKE_CONTRACT_ID")]
    pub contract: String,

    /// Quote price as a signed 128-bit integer
    #[arg(long, env = "ZMOKE_PRICE", allow_hyphen_values = true)]
    pub price: i128,

    /// Quote timestamp in UNIX seconds [default: now]
    #[arg(long, env = "ZMOKE_TIMESTAMP")]
    pub timestamp: Option<u64>,

    /// Print the signed quote as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

/// Resolved configuration for signing one quote.
#[derive(Debug)]
pub struct SignerConfig {
    /// The oracle keypair, parsed from the secret seed.
    pub keypair: OracleKeypair,
    /// Contract the quote is bound to.
    pub contract_id: ContractId,
    /// Quote price.
    pub price: i128,
    /// Quote timestamp.
    pub timestamp: u64,
    /// Output format.
    pub output: OutputFormat,
}

impl SignerConfig {
    /// Resolve command-line arguments.
    ///
    /// The secret is parsed before anything else, so a malformed secret
    /// fails the tool before any other work.
    pub fn from_args(args: SignArgs) -> Result<Self> {
        let keypair = OracleKeypair::from_secret(&args.secret)?;
        let contract_id = ContractId::from_strkey(&args.contract)?;
        let timestamp = match args.timestamp {
            Some(timestamp) => timestamp,
            None => now_secs()?,
        };
        let output = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            keypair,
            contract_id,
            price: args.price,
            timestamp,
            output,
        })
    }
}

/// Get current time in seconds.
fn now_secs() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .map_err(|e| OracleError::Config(format!("system clock is before the UNIX epoch: {e}")))
}
