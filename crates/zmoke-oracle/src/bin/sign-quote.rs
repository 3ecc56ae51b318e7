//! Sign a price quote bound to one contract instance.

use anyhow::Context;
use clap::Parser;

use zmoke_oracle::commands::sign_quote;
use zmoke_oracle::{logging, SignArgs, SignerConfig};

fn main() -> anyhow::Result<()> {
    let args = SignArgs::parse();
    logging::init(&args.log_level);

    let config = SignerConfig::from_args(args).context("invalid signer configuration")?;
    tracing::debug!(oracle = %config.keypair.public_key(), "loaded oracle key");

    let output = sign_quote(&config).context("failed to sign quote")?;
    print!("{output}");
    Ok(())
}
