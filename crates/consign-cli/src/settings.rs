//! Environment-variable configuration for the CLI.
//!
//! The library crates take an explicit [`CourierConfig`]; this module is
//! the one place where that config is assembled from the process
//! environment. Only the API key is mandatory.

use anyhow::{bail, Context};

use consign_core::{Phone, Pincode};
use consign_courier_client::{CourierConfig, ReturnAddress};

/// Mandatory API token.
pub const ENV_API_KEY: &str = "COURIER_API_KEY";
/// Carrier API base URL; defaults to the production endpoint.
pub const ENV_BASE_URL: &str = "COURIER_BASE_URL";
/// Seller name printed on labels; defaults to `"Consign"`.
pub const ENV_CLIENT_NAME: &str = "COURIER_CLIENT_NAME";
/// Request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "COURIER_TIMEOUT_SECS";
/// Return/pickup address overrides.
pub const ENV_RETURN_ADDRESS: &str = "COURIER_RETURN_ADDRESS";
pub const ENV_RETURN_CITY: &str = "COURIER_RETURN_CITY";
pub const ENV_RETURN_STATE: &str = "COURIER_RETURN_STATE";
pub const ENV_RETURN_PIN: &str = "COURIER_RETURN_PIN";
pub const ENV_RETURN_PHONE: &str = "COURIER_RETURN_PHONE";
pub const ENV_RETURN_COUNTRY: &str = "COURIER_RETURN_COUNTRY";

const DEFAULT_BASE_URL: &str = "https://track.delhivery.com/api";
const DEFAULT_CLIENT_NAME: &str = "Consign";

fn optional_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Assemble a [`CourierConfig`] from the environment.
///
/// # Errors
///
/// Fails if `COURIER_API_KEY` is unset, or if any provided override
/// (URL, timeout, return pincode/phone) is malformed.
pub fn config_from_env() -> anyhow::Result<CourierConfig> {
    let Some(api_key) = optional_var(ENV_API_KEY) else {
        bail!("{ENV_API_KEY} is not set; export the carrier API token first");
    };

    let base_url = optional_var(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let client_name =
        optional_var(ENV_CLIENT_NAME).unwrap_or_else(|| DEFAULT_CLIENT_NAME.to_string());

    let mut config = CourierConfig::new(&base_url, api_key, client_name)?;

    if let Some(raw) = optional_var(ENV_TIMEOUT_SECS) {
        let timeout_secs: u64 = raw
            .parse()
            .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a number, got {raw:?}"))?;
        config = config.with_timeout_secs(timeout_secs);
    }

    let mut return_address = ReturnAddress::default();
    if let Some(address) = optional_var(ENV_RETURN_ADDRESS) {
        return_address.address = address;
    }
    if let Some(city) = optional_var(ENV_RETURN_CITY) {
        return_address.city = city;
    }
    if let Some(state) = optional_var(ENV_RETURN_STATE) {
        return_address.state = state;
    }
    if let Some(pin) = optional_var(ENV_RETURN_PIN) {
        return_address.pincode =
            Pincode::new(pin).with_context(|| format!("{ENV_RETURN_PIN} is not a valid pincode"))?;
    }
    if let Some(phone) = optional_var(ENV_RETURN_PHONE) {
        return_address.phone = Phone::new(phone)
            .with_context(|| format!("{ENV_RETURN_PHONE} is not a valid phone number"))?;
    }
    if let Some(country) = optional_var(ENV_RETURN_COUNTRY) {
        return_address.country = country;
    }

    Ok(config.with_return_address(return_address))
}

#[cfg(test)]
mod tests {
    use super::*;

    // The COURIER_* variables are only touched by this test within the
    // test binary, so there is no cross-test interference.
    #[test]
    fn config_from_env_reads_overrides() {
        std::env::set_var(ENV_API_KEY, "test-key");
        std::env::set_var(ENV_BASE_URL, "https://staging.example.com/api/");
        std::env::set_var(ENV_CLIENT_NAME, "Zelton");
        std::env::set_var(ENV_TIMEOUT_SECS, "5");
        std::env::set_var(ENV_RETURN_CITY, "Ambala");
        std::env::set_var(ENV_RETURN_PIN, "134003");

        let config = config_from_env().expect("config");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.client_name, "Zelton");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url_trimmed(), "https://staging.example.com/api");
        assert_eq!(config.return_address.city, "Ambala");
        assert_eq!(config.return_address.pincode.as_str(), "134003");
        // Untouched fields keep their defaults.
        assert_eq!(config.return_address.state, "Maharashtra");
    }
}
