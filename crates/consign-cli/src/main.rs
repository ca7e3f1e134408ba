//! # consign CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros for argument parsing; verbosity is controlled
//! with repeated `-v` flags and feeds the tracing filter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use consign_cli::address::{run_parse_address, ParseAddressArgs};
use consign_cli::shipment::{
    run_cancel, run_create, run_serviceability, run_sync, run_track, run_warehouses, CancelArgs,
    CreateArgs, ServiceabilityArgs, SyncArgs, TrackArgs,
};

/// Consign — courier gateway and shipping-address toolkit.
///
/// Reads carrier credentials from `COURIER_API_KEY` and friends; see the
/// `settings` module docs for the full variable list.
#[derive(Parser, Debug)]
#[command(name = "consign", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a free-text shipping address into structured fields.
    ParseAddress(ParseAddressArgs),

    /// Create a carrier shipment from an order JSON document.
    Create(CreateArgs),

    /// Fetch the tracking snapshot for a waybill.
    Track(TrackArgs),

    /// Check whether the carrier delivers to a pincode.
    Serviceability(ServiceabilityArgs),

    /// Cancel a shipment.
    Cancel(CancelArgs),

    /// List the pickup warehouses registered with the carrier.
    Warehouses,

    /// One track-and-reconcile pass for a waybill (scheduler entry point).
    Sync(SyncArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::ParseAddress(args) => run_parse_address(&args),
        Commands::Create(args) => run_create(&args),
        Commands::Track(args) => run_track(&args),
        Commands::Serviceability(args) => run_serviceability(&args),
        Commands::Cancel(args) => run_cancel(&args),
        Commands::Warehouses => run_warehouses(),
        Commands::Sync(args) => run_sync(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
