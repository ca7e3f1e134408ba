//! Validation errors for the identifier newtypes.

/// Errors raised when constructing a domain identifier from raw input.
///
/// Each variant carries the offending value so callers can report the
/// failing field back to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Postal code is not exactly 6 ASCII digits.
    #[error("invalid pincode: {0:?}")]
    InvalidPincode(String),

    /// Phone number has no usable digits, or too many of them.
    #[error("invalid phone number: {0:?}")]
    InvalidPhone(String),

    /// Waybill is empty, too long, or contains unexpected characters.
    #[error("invalid waybill: {0:?}")]
    InvalidWaybill(String),

    /// Order number is empty, too long, or contains whitespace.
    #[error("invalid order number: {0:?}")]
    InvalidOrderNumber(String),
}
