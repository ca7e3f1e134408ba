//! Deployment configuration for the courier adapter.
//!
//! Everything the adapter needs is carried in an explicit
//! [`CourierConfig`] injected at construction: API token, base URL,
//! seller identity, and the return/pickup address stamped onto every
//! shipment. No ambient global state.

use url::Url;

use consign_core::{Phone, Pincode};

use crate::error::CourierError;

/// Return / pickup address defaults applied to every outbound shipment.
#[derive(Debug, Clone)]
pub struct ReturnAddress {
    /// Street address of the pickup warehouse.
    pub address: String,
    /// Warehouse city.
    pub city: String,
    /// Warehouse state.
    pub state: String,
    /// Warehouse pincode.
    pub pincode: Pincode,
    /// Warehouse contact phone.
    pub phone: Phone,
    /// Country, `"India"` unless overridden.
    pub country: String,
}

impl Default for ReturnAddress {
    fn default() -> Self {
        Self {
            address: "Warehouse Address".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: Pincode::new("400001").expect("static default pincode"),
            phone: Phone::new("9999999999").expect("static default phone"),
            country: "India".to_string(),
        }
    }
}

/// Configuration for the courier HTTP adapter.
#[derive(Debug, Clone)]
pub struct CourierConfig {
    /// Base URL of the courier API (e.g. `https://track.delhivery.com/api`).
    pub base_url: Url,
    /// API token, sent as `Authorization: Token <key>`.
    pub api_key: String,
    /// Seller name the courier prints on labels and invoices.
    pub client_name: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_secs: u64,
    /// Return/pickup address stamped onto every shipment.
    pub return_address: ReturnAddress,
}

impl CourierConfig {
    /// Create a configuration with the default timeout and return
    /// address.
    ///
    /// # Errors
    ///
    /// Returns [`CourierError::NotConfigured`] if `base_url` is not a
    /// valid absolute URL.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        client_name: impl Into<String>,
    ) -> Result<Self, CourierError> {
        let base_url = Url::parse(base_url).map_err(|e| CourierError::NotConfigured {
            reason: format!("invalid base URL {base_url:?}: {e}"),
        })?;
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            client_name: client_name.into(),
            timeout_secs: 30,
            return_address: ReturnAddress::default(),
        })
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Override the return/pickup address.
    pub fn with_return_address(mut self, return_address: ReturnAddress) -> Self {
        self.return_address = return_address;
        self
    }

    /// Base URL as a string with any trailing slash removed, ready for
    /// endpoint-path concatenation.
    pub fn base_url_trimmed(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}
