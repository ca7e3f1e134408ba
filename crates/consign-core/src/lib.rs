//! # consign-core — Foundational Types
//!
//! Domain-primitive types shared by every Consign crate: validated
//! identifier newtypes, the order/payment vocabulary, and the structured
//! validation error hierarchy.
//!
//! ## Design
//!
//! Identifiers are distinct types — you cannot pass a [`Waybill`] where a
//! [`Pincode`] is expected. String-based identifiers validate their format
//! at construction time and again at deserialization time, so an invalid
//! value can never exist inside the type.
//!
//! This crate performs no I/O and has no knowledge of any specific
//! courier; downstream crates depend on it only for these primitives.

pub mod error;
pub mod identity;
pub mod status;

pub use error::ValidationError;
pub use identity::{OrderId, OrderNumber, Phone, Pincode, Waybill};
pub use status::{OrderStatus, PaymentMode};
