//! `consign parse-address` — run the address parser standalone.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use consign_address::{parse_address, ProfileFallback};
use consign_core::Phone;

/// Arguments for `consign parse-address`.
#[derive(Args, Debug)]
pub struct ParseAddressArgs {
    /// Read the raw address from this file instead of stdin.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Profile name to fall back to when the address has no name line.
    #[arg(long)]
    pub fallback_name: Option<String>,

    /// Profile phone to fall back to when the address has no phone line.
    #[arg(long)]
    pub fallback_phone: Option<String>,
}

/// Parse an address blob and print the structured result as JSON.
/// Exits non-zero with the offending field when parsing fails.
pub fn run_parse_address(args: &ParseAddressArgs) -> anyhow::Result<u8> {
    let raw = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read address from stdin")?;
            buffer
        }
    };

    let fallback = ProfileFallback {
        name: args.fallback_name.clone(),
        phone: args
            .fallback_phone
            .as_deref()
            .map(Phone::new)
            .transpose()
            .context("--fallback-phone is not a valid phone number")?,
    };

    match parse_address(&raw, &fallback) {
        Ok(parsed) => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            Ok(0)
        }
        Err(e) => {
            eprintln!("address parse failed: {e}");
            Ok(1)
        }
    }
}
