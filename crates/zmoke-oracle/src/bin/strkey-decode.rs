//! Decode a strkey address and print its raw payload as lowercase hex.

use anyhow::Context;
use clap::Parser;

use zmoke_oracle::commands::decode_address;
use zmoke_oracle::{logging, DecodeArgs};

fn main() -> anyhow::Result<()> {
    let args = DecodeArgs::parse();
    logging::init(&args.log_level);

    let payload = decode_address(&args.address, args.kind)
        .with_context(|| format!("failed to decode {} address", args.kind))?;

    println!("{payload}");
    Ok(())
}
