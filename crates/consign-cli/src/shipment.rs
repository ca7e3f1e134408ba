//! Shipment subcommands: create, track, serviceability, cancel,
//! warehouses, and the one-shot tracking sync.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Args;

use consign_core::{OrderStatus, Pincode, Waybill};
use consign_courier_client::{
    CourierAdapter, HttpCourierAdapter, OrderShipping,
};

use crate::order::OrderDocument;
use crate::settings::config_from_env;
use crate::with_runtime;

fn adapter_from_env() -> anyhow::Result<HttpCourierAdapter> {
    let config = config_from_env()?;
    Ok(HttpCourierAdapter::new(config)?)
}

/// Arguments for `consign create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Path to the order JSON document.
    #[arg(long)]
    pub order: PathBuf,
}

/// Create a shipment from an order document. A business rejection (no
/// waybill assigned) prints the carrier's message and exits with 1.
pub fn run_create(args: &CreateArgs) -> anyhow::Result<u8> {
    let raw = std::fs::read_to_string(&args.order)
        .with_context(|| format!("failed to read {}", args.order.display()))?;
    let document: OrderDocument =
        serde_json::from_str(&raw).context("order document is not valid JSON")?;
    let request = document.to_shipment_request(Utc::now())?;

    let adapter = adapter_from_env()?;
    let result = with_runtime(|| adapter.create_shipment(&request))?;

    if result.success {
        let mut shipping = OrderShipping::new(OrderStatus::Processing);
        if let Some(waybill) = result.waybill.clone() {
            shipping.record_creation(waybill, "Delhivery", Utc::now());
        }
        println!("{}", serde_json::to_string_pretty(&shipping)?);
        Ok(0)
    } else {
        eprintln!("shipment rejected by carrier: {}", result.message);
        eprintln!("{}", serde_json::to_string_pretty(&result.raw_response)?);
        Ok(1)
    }
}

/// Arguments for `consign track`.
#[derive(Args, Debug)]
pub struct TrackArgs {
    /// Waybill to track.
    #[arg(long)]
    pub waybill: String,
}

/// Fetch and print the tracking snapshot for a waybill.
pub fn run_track(args: &TrackArgs) -> anyhow::Result<u8> {
    let waybill = Waybill::new(args.waybill.clone())?;
    let adapter = adapter_from_env()?;
    let snapshot = with_runtime(|| adapter.track_shipment(&waybill))?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(0)
}

/// Arguments for `consign serviceability`.
#[derive(Args, Debug)]
pub struct ServiceabilityArgs {
    /// Pincode to check.
    #[arg(long)]
    pub pincode: String,
}

/// Check whether the carrier delivers to a pincode.
pub fn run_serviceability(args: &ServiceabilityArgs) -> anyhow::Result<u8> {
    let pincode = Pincode::new(args.pincode.clone())?;
    let adapter = adapter_from_env()?;
    let result = with_runtime(|| adapter.check_serviceability(&pincode))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(if result.serviceable { 0 } else { 1 })
}

/// Arguments for `consign cancel`.
#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Waybill to cancel.
    #[arg(long)]
    pub waybill: String,
}

/// Cancel a shipment and print the updated shipping fields.
pub fn run_cancel(args: &CancelArgs) -> anyhow::Result<u8> {
    let waybill = Waybill::new(args.waybill.clone())?;
    let adapter = adapter_from_env()?;
    let cancellation = with_runtime(|| adapter.cancel_shipment(&waybill))?;

    let mut shipping = OrderShipping::new(OrderStatus::Shipped);
    shipping.waybill = Some(waybill);
    shipping.record_cancellation(Utc::now());
    println!("{}", serde_json::to_string_pretty(&shipping)?);
    tracing::info!(message = %cancellation.message, "cancellation accepted");
    Ok(0)
}

/// List the pickup warehouses registered with the carrier.
pub fn run_warehouses() -> anyhow::Result<u8> {
    let adapter = adapter_from_env()?;
    let warehouses = with_runtime(|| adapter.list_warehouses())?;
    println!("{}", serde_json::to_string_pretty(&warehouses)?);
    Ok(0)
}

/// Arguments for `consign sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Waybill to refresh.
    #[arg(long)]
    pub waybill: String,

    /// Current order status, so the reconciliation table can decide
    /// whether the tracked carrier status changes it.
    #[arg(long, default_value = "shipped")]
    pub status: OrderStatus,
}

/// One track-and-reconcile pass: fetch the tracking snapshot, run it
/// through the status table, and print the shipping fields the caller
/// should persist. The periodic cadence belongs to an external trigger.
pub fn run_sync(args: &SyncArgs) -> anyhow::Result<u8> {
    let waybill = Waybill::new(args.waybill.clone())?;
    let adapter = adapter_from_env()?;
    let snapshot = with_runtime(|| adapter.track_shipment(&waybill))?;

    let mut shipping = OrderShipping::new(args.status);
    shipping.waybill = Some(waybill.clone());
    let changed = shipping.reconcile(&snapshot, Utc::now());

    if changed {
        tracing::info!(waybill = %waybill, status = %shipping.status, "order status changed");
    } else {
        tracing::info!(waybill = %waybill, carrier_status = %snapshot.status, "order status unchanged");
    }

    println!("{}", serde_json::to_string_pretty(&shipping)?);
    Ok(0)
}
