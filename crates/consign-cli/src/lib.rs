//! # consign-cli — Command-Line Tool for Consign
//!
//! Provides the `consign` binary: manual drivers for every courier
//! gateway operation plus the address parser, configured entirely from
//! environment variables. The `sync` subcommand is the entry point an
//! external scheduler invokes periodically to refresh order state from
//! carrier tracking; the schedule itself lives outside this tool.
//!
//! ## Subcommands
//!
//! - `consign parse-address` — parse a raw address blob from a file or stdin.
//! - `consign create` — create a shipment from an order JSON document.
//! - `consign track` — fetch the tracking snapshot for a waybill.
//! - `consign serviceability` — check whether a pincode is deliverable.
//! - `consign cancel` — cancel a shipment.
//! - `consign warehouses` — list registered pickup warehouses.
//! - `consign sync` — one track-and-reconcile pass for a waybill.

pub mod address;
pub mod order;
pub mod settings;
pub mod shipment;

use anyhow::Context;

use consign_courier_client::CourierError;

/// Run a synchronous courier adapter call with an ambient Tokio runtime.
///
/// The adapter's trait methods block on the current runtime handle, so
/// the CLI builds a runtime, enters it, and invokes the call from this
/// (non-async) thread.
pub fn with_runtime<T>(f: impl FnOnce() -> Result<T, CourierError>) -> anyhow::Result<T> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let _guard = rt.enter();
    Ok(f()?)
}
