//! # Identifier Newtypes
//!
//! Domain-primitive newtypes for the identifiers that flow between the
//! address parser, the courier gateway, and the caller's order records.
//!
//! ## Validation
//!
//! String-based identifiers ([`Pincode`], [`Phone`], [`Waybill`],
//! [`OrderNumber`]) validate format at construction time. The UUID-based
//! [`OrderId`] is always valid by construction.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time rather than silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// UUID-based identifiers (always valid by construction)
// ---------------------------------------------------------------------------

/// A unique identifier for an order record owned by the caller's
/// order-management subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Create a new random order identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an order identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

// ---------------------------------------------------------------------------
// String-based identifiers (validated at construction)
// ---------------------------------------------------------------------------

/// Indian postal code (PIN code).
///
/// Validated at construction to be exactly 6 digits. Leading zeros are
/// significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pincode(String);

impl_validating_deserialize!(Pincode);

impl Pincode {
    /// Create a pincode from a string value, validating the 6-digit format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPincode`] if the string is not
    /// exactly 6 digits.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.len() != 6 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidPincode(s));
        }
        Ok(Self(s))
    }

    /// Access the pincode string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Pincode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer phone number, stored in canonical digits-only form.
///
/// The constructor strips every non-digit character, so
/// `"+91 98765-43210"` and `"919876543210"` produce the same value.
///
/// # Validation
///
/// - Must contain at least 4 and at most 15 digits after stripping
///   (ITU-T E.164 bounds the international number plan at 15).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Phone(String);

impl_validating_deserialize!(Phone);

impl Phone {
    /// Create a phone number, stripping formatting characters and
    /// validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhone`] if fewer than 4 or more
    /// than 15 digits remain after stripping.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        if digits.len() < 4 || digits.len() > 15 {
            return Err(ValidationError::InvalidPhone(raw));
        }
        Ok(Self(digits))
    }

    /// Access the phone number in canonical digits-only form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Carrier-assigned shipment tracking identifier.
///
/// # Validation
///
/// - Must be 1-32 characters
/// - ASCII letters, digits, and dashes only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Waybill(String);

impl_validating_deserialize!(Waybill);

impl Waybill {
    /// Create a waybill from a string value, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidWaybill`] if the string is empty,
    /// longer than 32 characters, or contains characters outside
    /// `[A-Za-z0-9-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty()
            || s.len() > 32
            || !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ValidationError::InvalidWaybill(s));
        }
        Ok(Self(s))
    }

    /// Access the waybill string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Waybill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-facing order number (e.g. `"ORD-2026-000451"`).
///
/// Distinct from [`OrderId`]: the order number is what appears on
/// invoices and is echoed to the carrier as the seller reference.
///
/// # Validation
///
/// - Must be 1-64 characters
/// - Must not contain whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OrderNumber(String);

impl_validating_deserialize!(OrderNumber);

impl OrderNumber {
    /// Create an order number from a string value, validating format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidOrderNumber`] if the string is
    /// empty, longer than 64 characters, or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || s.len() > 64 || s.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidOrderNumber(s));
        }
        Ok(Self(s))
    }

    /// Access the order number string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
