//! The courier adapter trait.

use consign_core::{Pincode, Waybill};

use crate::error::CourierError;
use crate::types::{
    Cancellation, Serviceability, ShipmentRequest, ShipmentResult, TrackingSnapshot, Warehouse,
};

/// Adapter trait for the courier backend.
///
/// Each operation performs at most one outbound call and runs to
/// completion synchronously within the calling request. Implementations
/// must be `Send + Sync` so they can be shared across async tasks behind
/// an `Arc`; the trait is object-safe to support runtime adapter
/// selection (mock vs. live).
pub trait CourierAdapter: Send + Sync {
    /// Create a shipment for an order.
    ///
    /// An `Ok` result with `success == false` means the carrier was
    /// reached but declined to assign a waybill; an `Err` means the
    /// carrier could not be asked (or answered garbage).
    fn create_shipment(&self, request: &ShipmentRequest) -> Result<ShipmentResult, CourierError>;

    /// Fetch the current tracking state for a waybill.
    fn track_shipment(&self, waybill: &Waybill) -> Result<TrackingSnapshot, CourierError>;

    /// Check whether the carrier delivers to a pincode.
    fn check_serviceability(&self, pincode: &Pincode) -> Result<Serviceability, CourierError>;

    /// Cancel an existing shipment.
    fn cancel_shipment(&self, waybill: &Waybill) -> Result<Cancellation, CourierError>;

    /// List the pickup warehouses registered with the carrier.
    fn list_warehouses(&self) -> Result<Vec<Warehouse>, CourierError>;

    /// Human-readable name of this adapter implementation
    /// (e.g. `"MockCourierAdapter"`, `"HttpCourierAdapter"`).
    fn adapter_name(&self) -> &str;
}
