//! Carrier-status to order-status reconciliation.
//!
//! The mapping is a plain ordered list of pairs checked by exact string
//! match. A carrier status that is not in the table leaves the order
//! status unchanged: an explicit no-op, not an error, because the
//! carrier's vocabulary grows faster than ours and an unknown label
//! must never corrupt order state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use consign_core::{OrderStatus, Waybill};

use crate::types::TrackingSnapshot;

/// The fixed carrier-status → order-status table.
///
/// Order matters only for readability; lookups are exact-match.
pub const CARRIER_STATUS_MAP: &[(&str, OrderStatus)] = &[
    ("Dispatched", OrderStatus::Shipped),
    ("In Transit", OrderStatus::Shipped),
    ("Out for Delivery", OrderStatus::Shipped),
    ("Delivered", OrderStatus::Delivered),
    ("RTO", OrderStatus::Cancelled),
    ("Cancelled", OrderStatus::Cancelled),
];

/// Map a carrier status label to an order status. `None` means "leave
/// the order alone".
pub fn map_carrier_status(carrier_status: &str) -> Option<OrderStatus> {
    CARRIER_STATUS_MAP
        .iter()
        .find(|(label, _)| *label == carrier_status)
        .map(|(_, status)| *status)
}

/// The shipping-related slice of an order record.
///
/// The order itself is owned by the caller's order-management subsystem;
/// this struct mirrors the columns that shipment operations touch
/// (`waybill`, `courier_name`, `carrier_status`, `status_updated_at`,
/// `tracking_data`, `status`) so the caller can persist exactly what
/// changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderShipping {
    /// Current order lifecycle status.
    pub status: OrderStatus,
    /// Carrier waybill, once a shipment exists.
    pub waybill: Option<Waybill>,
    /// Which courier the shipment was handed to.
    pub courier_name: Option<String>,
    /// Last carrier status label observed.
    pub carrier_status: Option<String>,
    /// When the carrier status was last refreshed.
    pub status_updated_at: Option<DateTime<Utc>>,
    /// Last full tracking snapshot, as a JSON blob.
    pub tracking_data: Option<serde_json::Value>,
}

impl OrderShipping {
    /// Start from an order in the given lifecycle status with no
    /// shipment attached.
    pub fn new(status: OrderStatus) -> Self {
        Self {
            status,
            waybill: None,
            courier_name: None,
            carrier_status: None,
            status_updated_at: None,
            tracking_data: None,
        }
    }

    /// Record a successful shipment creation: attach the waybill, mark
    /// the order shipped, and stamp the observation time.
    pub fn record_creation(
        &mut self,
        waybill: Waybill,
        courier_name: &str,
        observed_at: DateTime<Utc>,
    ) {
        self.waybill = Some(waybill);
        self.courier_name = Some(courier_name.to_string());
        self.carrier_status = Some("Shipped".to_string());
        self.status_updated_at = Some(observed_at);
        self.status = OrderStatus::Shipped;
    }

    /// Record a successful cancellation.
    pub fn record_cancellation(&mut self, observed_at: DateTime<Utc>) {
        self.carrier_status = Some("Cancelled".to_string());
        self.status_updated_at = Some(observed_at);
        self.status = OrderStatus::Cancelled;
    }

    /// Apply a tracking snapshot: store the carrier status and the full
    /// snapshot blob, stamp the observation time, and move the order
    /// status through the reconciliation table.
    ///
    /// Returns `true` iff the order status changed. An unrecognized
    /// carrier status still records the snapshot but leaves the order
    /// status untouched.
    pub fn reconcile(&mut self, snapshot: &TrackingSnapshot, observed_at: DateTime<Utc>) -> bool {
        self.carrier_status = Some(snapshot.status.clone());
        self.status_updated_at = Some(observed_at);
        self.tracking_data = serde_json::to_value(snapshot).ok();

        match map_carrier_status(&snapshot.status) {
            Some(new_status) if new_status != self.status => {
                self.status = new_status;
                true
            }
            _ => false,
        }
    }
}
