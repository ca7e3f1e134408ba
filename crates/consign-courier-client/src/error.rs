//! Courier gateway error taxonomy.
//!
//! Four families of failure, per the integration contract:
//!
//! - validation: malformed input, reported with the offending value
//! - transport: the carrier could not be reached (retryable)
//! - business rejection: the carrier answered and said no (manual action)
//! - not found: the referenced waybill/resource does not exist
//!
//! [`CourierError::is_retryable`] and [`CourierError::status_class`]
//! expose the distinction so callers can build a JSON error body with
//! the right HTTP status class without matching on variants.

use consign_core::ValidationError;

/// HTTP-equivalent status class for a failure, for caller-side error
/// bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The request was at fault (validation, rejection, unknown
    /// resource): a 4xx-style response.
    ClientError,
    /// The carrier or the deployment was at fault: a 5xx-style response.
    ServerError,
}

/// Errors from courier gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum CourierError {
    /// Network-level failure reaching the carrier.
    #[error("{operation}: carrier unreachable: {reason}")]
    Transport {
        /// The adapter operation that failed.
        operation: &'static str,
        /// Human-readable description of the transport failure.
        reason: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("{operation}: carrier request timed out after {elapsed_ms}ms")]
    Timeout {
        /// The adapter operation that failed.
        operation: &'static str,
        /// Elapsed time in milliseconds before the timeout triggered.
        elapsed_ms: u64,
    },

    /// The carrier returned a 5xx status.
    #[error("{operation}: carrier service error (HTTP {status}): {body}")]
    ServiceUnavailable {
        /// The adapter operation that failed.
        operation: &'static str,
        /// HTTP status code returned by the carrier.
        status: u16,
        /// Response body excerpt for diagnosis.
        body: String,
    },

    /// The carrier was reachable but refused the operation (4xx), e.g.
    /// an account-verification hold. Not retryable without manual
    /// intervention.
    #[error("{operation}: carrier rejected the request (HTTP {status}): {body}")]
    Rejected {
        /// The adapter operation that failed.
        operation: &'static str,
        /// HTTP status code returned by the carrier.
        status: u16,
        /// Carrier-provided error body.
        body: String,
    },

    /// The referenced waybill or resource does not exist.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource.
        what: String,
    },

    /// The carrier answered with a payload the client could not
    /// interpret.
    #[error("{operation}: unexpected carrier response: {reason}")]
    BadResponse {
        /// The adapter operation that failed.
        operation: &'static str,
        /// Description of the shape mismatch.
        reason: String,
    },

    /// The adapter configuration is unusable (bad URL, bad API key).
    #[error("courier adapter not configured: {reason}")]
    NotConfigured {
        /// Why configuration is missing or invalid.
        reason: String,
    },

    /// An input identifier failed validation before any request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CourierError {
    /// Whether retrying the same call later can plausibly succeed.
    ///
    /// Transport failures, timeouts, and carrier 5xx responses are
    /// retryable; rejections, validation failures, and unknown resources
    /// are not.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::ServiceUnavailable { .. }
        )
    }

    /// HTTP-equivalent status class for the caller's error body.
    pub fn status_class(&self) -> StatusClass {
        match self {
            Self::Rejected { .. } | Self::NotFound { .. } | Self::Validation(_) => {
                StatusClass::ClientError
            }
            Self::Transport { .. }
            | Self::Timeout { .. }
            | Self::ServiceUnavailable { .. }
            | Self::BadResponse { .. }
            | Self::NotConfigured { .. } => StatusClass::ServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_family_is_retryable() {
        let errors = [
            CourierError::Transport {
                operation: "track_shipment",
                reason: "connection refused".into(),
            },
            CourierError::Timeout {
                operation: "create_shipment",
                elapsed_ms: 30_000,
            },
            CourierError::ServiceUnavailable {
                operation: "create_shipment",
                status: 502,
                body: "Bad Gateway".into(),
            },
        ];
        for err in errors {
            assert!(err.is_retryable(), "{err} should be retryable");
            assert_eq!(err.status_class(), StatusClass::ServerError);
        }
    }

    #[test]
    fn rejection_family_is_not_retryable() {
        let err = CourierError::Rejected {
            operation: "create_shipment",
            status: 400,
            body: "suspicious order/consignee".into(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status_class(), StatusClass::ClientError);
    }

    #[test]
    fn not_found_is_client_error() {
        let err = CourierError::NotFound {
            what: "waybill 46754510000044".into(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.status_class(), StatusClass::ClientError);
    }

    #[test]
    fn validation_converts_and_classifies() {
        let err: CourierError = ValidationError::InvalidPincode("12".into()).into();
        assert_eq!(err.status_class(), StatusClass::ClientError);
        assert!(err.to_string().contains("12"));
    }

    #[test]
    fn display_includes_operation_and_body() {
        let err = CourierError::ServiceUnavailable {
            operation: "cancel_shipment",
            status: 503,
            body: "maintenance window".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cancel_shipment"));
        assert!(msg.contains("503"));
        assert!(msg.contains("maintenance window"));
    }
}
