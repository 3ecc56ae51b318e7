//! The work behind each command-line tool.
//!
//! Each command returns the text to print on stdout; the binaries only
//! parse arguments, call in here, and map errors to an exit status.

use zmoke_oracle_core::{strkey, Quote, SignedQuote};

use crate::config::{KindArg, OutputFormat, SignerConfig};
use crate::error::Result;

/// Decode an address and return its payload as lowercase hex.
pub fn decode_address(address: &str, kind: KindArg) -> Result<String> {
    let payload = match kind.strkey_kind() {
        Some(kind) => strkey::decode(address, kind)?,
        None => {
            let decoded = strkey::decode_any(address)?;
            tracing::debug!(kind = %decoded.kind(), "detected address kind");
            *decoded.payload()
        }
    };

    Ok(hex::encode(payload))
}

/// Sign the configured quote and render it.
pub fn sign_quote(config: &SignerConfig) -> Result<String> {
    let quote = Quote::new(config.contract_id, config.price, config.timestamp);
    let signed = quote.sign(&config.keypair);

    tracing::info!(
        oracle = %signed.oracle,
        contract = %quote.contract_id,
        price = %quote.price,
        timestamp = quote.timestamp,
        "signed quote"
    );

    match config.output {
        OutputFormat::Text => Ok(render_text(&signed)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&signed)?),
    }
}

/// Human-readable rendering of a signed quote.
pub fn render_text(signed: &SignedQuote) -> String {
    format!(
        "\n=== Oracle Quote generated ===\n\
         Oracle:    {}\n\
         Contract:  {}\n\
         Price:     {}\n\
         Timestamp: {}\n\
         Signature: {}\n\
         ==============================\n",
        signed.oracle, signed.quote.contract_id, signed.quote.price, signed.quote.timestamp, signed.signature,
    )
}
