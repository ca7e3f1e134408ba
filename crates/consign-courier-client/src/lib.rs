//! # consign-courier-client — Courier Gateway Adapter
//!
//! Typed client for the courier's shipment API (Delhivery CMU wire
//! format): create shipments, track them, check pincode serviceability,
//! cancel, and list pickup warehouses.
//!
//! ## Architecture
//!
//! The [`CourierAdapter`] trait abstracts over the courier backend.
//! Production deployments use [`HttpCourierAdapter`] against the live
//! API; tests and development use the deterministic
//! [`MockCourierAdapter`]. Both are `Send + Sync` and object-safe, so an
//! adapter can be selected at runtime and shared behind an `Arc`.
//!
//! ## Error handling
//!
//! Every carrier-facing failure is caught at the adapter boundary,
//! logged with the operation name and raw response, and converted into a
//! [`CourierError`]. Callers never see transport-library error types.
//! Transport failures ([`CourierError::is_retryable`]) are kept distinct
//! from business rejections: an HTTP 200 create response without a
//! waybill is a business failure (`success = false` on the result), not
//! an error.
//!
//! ## Retry
//!
//! The adapter never retries on its own. Retry policy belongs to the
//! caller's scheduler; the error taxonomy tells it what is worth
//! retrying.

pub mod adapter;
pub mod config;
pub mod error;
pub mod http_adapter;
pub mod mock;
pub mod status;
pub mod types;
pub mod wire;

pub use adapter::CourierAdapter;
pub use config::{CourierConfig, ReturnAddress};
pub use error::{CourierError, StatusClass};
pub use http_adapter::HttpCourierAdapter;
pub use mock::MockCourierAdapter;
pub use status::{map_carrier_status, OrderShipping, CARRIER_STATUS_MAP};
pub use types::{
    Cancellation, ScanEvent, Serviceability, ShipmentRequest, ShipmentResult, TrackingSnapshot,
    Warehouse,
};
