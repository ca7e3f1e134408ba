//! Live HTTP implementation of the courier adapter.
//!
//! Wraps a `reqwest::Client` with the carrier base URL, token
//! authentication, and request/response mapping. The trait methods are
//! synchronous and enter the ambient Tokio runtime via
//! `Handle::try_current().block_on`; call them from a blocking context
//! (`spawn_blocking`, or a thread holding a runtime guard), never from
//! inside an async task.
//!
//! Every failure is logged here with the operation name, the identifiers
//! involved, and the carrier's response body, then converted into a
//! [`CourierError`]. No retries: the caller owns retry policy.

use std::time::Duration;

use serde_json::Value;

use consign_core::{Pincode, Waybill};

use crate::adapter::CourierAdapter;
use crate::config::CourierConfig;
use crate::error::CourierError;
use crate::types::{
    Cancellation, Serviceability, ShipmentRequest, ShipmentResult, TrackingSnapshot, Warehouse,
};
use crate::wire;

/// Real HTTP client for the courier API.
#[derive(Debug)]
pub struct HttpCourierAdapter {
    client: reqwest::Client,
    base_url: String,
    config: CourierConfig,
}

impl HttpCourierAdapter {
    /// Create a new adapter from deployment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CourierError::NotConfigured`] if the API key contains
    /// characters that cannot appear in a header, or if the underlying
    /// HTTP client cannot be built.
    pub fn new(config: CourierConfig) -> Result<Self, CourierError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!("Token {}", config.api_key))
                        .map_err(|_| CourierError::NotConfigured {
                            reason: "invalid API key characters".into(),
                        })?,
                );
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| CourierError::NotConfigured {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        let base_url = config.base_url_trimmed();
        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    fn runtime_handle(
        &self,
        operation: &'static str,
    ) -> Result<tokio::runtime::Handle, CourierError> {
        tokio::runtime::Handle::try_current().map_err(|_| CourierError::Transport {
            operation,
            reason: "no async runtime available for HTTP request".into(),
        })
    }

    /// Send a request and handle transport errors and carrier 5xx
    /// responses uniformly.
    async fn send_request(
        &self,
        request: reqwest::RequestBuilder,
        operation: &'static str,
    ) -> Result<reqwest::Response, CourierError> {
        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!(operation, elapsed_ms = self.config.timeout_secs * 1000, "carrier request timed out");
                CourierError::Timeout {
                    operation,
                    elapsed_ms: self.config.timeout_secs * 1000,
                }
            } else {
                tracing::error!(operation, error = %e, "carrier unreachable");
                CourierError::Transport {
                    operation,
                    reason: e.to_string(),
                }
            }
        })?;

        if resp.status().is_server_error() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(operation, status = %status, body = %body, "carrier service error");
            return Err(CourierError::ServiceUnavailable {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp)
    }

    fn bad_response(operation: &'static str, reason: impl std::fmt::Display) -> CourierError {
        CourierError::BadResponse {
            operation,
            reason: reason.to_string(),
        }
    }
}

impl CourierAdapter for HttpCourierAdapter {
    fn create_shipment(&self, request: &ShipmentRequest) -> Result<ShipmentResult, CourierError> {
        const OPERATION: &str = "create_shipment";
        let rt = self.runtime_handle(OPERATION)?;

        let url = format!("{}/cmu/create.json", self.base_url);
        let payload = wire::CreatePayload::for_request(request, &self.config);
        let body = payload
            .body()
            .map_err(|e| Self::bad_response(OPERATION, format!("payload serialization failed: {e}")))?;

        tracing::info!(
            operation = OPERATION,
            order = %request.order_number,
            url = %url,
            "submitting shipment to carrier"
        );

        rt.block_on(async {
            let resp = self
                .send_request(self.client.post(&url).body(body.clone()), OPERATION)
                .await?;

            if resp.status().is_client_error() {
                let status = resp.status().as_u16();
                let response_body = resp.text().await.unwrap_or_default();
                tracing::error!(
                    operation = OPERATION,
                    order = %request.order_number,
                    status,
                    body = %response_body,
                    request_body = %body,
                    "carrier rejected shipment creation"
                );
                return Err(CourierError::Rejected {
                    operation: OPERATION,
                    status,
                    body: response_body,
                });
            }

            let raw: Value = resp
                .json()
                .await
                .map_err(|e| Self::bad_response(OPERATION, format!("response deserialization failed: {e}")))?;

            match wire::extract_waybill(&raw) {
                Some(assigned) => {
                    let waybill = Waybill::new(assigned).map_err(|e| {
                        Self::bad_response(OPERATION, format!("carrier returned unusable waybill: {e}"))
                    })?;
                    tracing::info!(
                        operation = OPERATION,
                        order = %request.order_number,
                        waybill = %waybill,
                        "shipment created"
                    );
                    Ok(ShipmentResult {
                        success: true,
                        waybill: Some(waybill),
                        message: "Shipment created successfully".to_string(),
                        raw_response: raw,
                    })
                }
                None => {
                    // HTTP success without a waybill: a business
                    // rejection, reported on the result rather than as
                    // an error so the caller can distinguish it from
                    // transport failures.
                    let message = wire::rejection_message(&raw);
                    tracing::warn!(
                        operation = OPERATION,
                        order = %request.order_number,
                        response = %raw,
                        request_body = %body,
                        "carrier accepted the call but assigned no waybill"
                    );
                    Ok(ShipmentResult {
                        success: false,
                        waybill: None,
                        message,
                        raw_response: raw,
                    })
                }
            }
        })
    }

    fn track_shipment(&self, waybill: &Waybill) -> Result<TrackingSnapshot, CourierError> {
        const OPERATION: &str = "track_shipment";
        let rt = self.runtime_handle(OPERATION)?;

        let url = format!("{}/v1/packages/json/", self.base_url);

        rt.block_on(async {
            let resp = self
                .send_request(
                    self.client.get(&url).query(&[("waybill", waybill.as_str())]),
                    OPERATION,
                )
                .await?;

            let status = resp.status();
            if status.as_u16() == 404 {
                return Err(CourierError::NotFound {
                    what: format!("waybill {waybill}"),
                });
            }
            if status.is_client_error() {
                let body = resp.text().await.unwrap_or_default();
                tracing::error!(operation = OPERATION, waybill = %waybill, status = %status, body = %body, "carrier rejected tracking request");
                return Err(CourierError::Rejected {
                    operation: OPERATION,
                    status: status.as_u16(),
                    body,
                });
            }

            let response: wire::TrackResponse = resp
                .json()
                .await
                .map_err(|e| Self::bad_response(OPERATION, format!("response deserialization failed: {e}")))?;

            let entry = response
                .shipment_data
                .into_iter()
                .next()
                .ok_or_else(|| CourierError::NotFound {
                    what: format!("waybill {waybill}"),
                })?;

            Ok(entry.into_snapshot())
        })
    }

    fn check_serviceability(&self, pincode: &Pincode) -> Result<Serviceability, CourierError> {
        const OPERATION: &str = "check_serviceability";
        let rt = self.runtime_handle(OPERATION)?;

        let url = format!("{}/c/api/pin-codes/json/", self.base_url);

        rt.block_on(async {
            let resp = self
                .send_request(
                    self.client
                        .get(&url)
                        .query(&[("filter_codes", pincode.as_str())]),
                    OPERATION,
                )
                .await?;

            if resp.status().is_client_error() {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                tracing::error!(operation = OPERATION, pincode = %pincode, status, body = %body, "carrier rejected serviceability check");
                return Err(CourierError::Rejected {
                    operation: OPERATION,
                    status,
                    body,
                });
            }

            let response: wire::PincodeResponse = resp
                .json()
                .await
                .map_err(|e| Self::bad_response(OPERATION, format!("response deserialization failed: {e}")))?;

            Ok(Serviceability {
                pincode: pincode.clone(),
                serviceable: !response.delivery_codes.is_empty(),
            })
        })
    }

    fn cancel_shipment(&self, waybill: &Waybill) -> Result<Cancellation, CourierError> {
        const OPERATION: &str = "cancel_shipment";
        let rt = self.runtime_handle(OPERATION)?;

        let url = format!("{}/cmu/cancel.json", self.base_url);
        let body = serde_json::json!({ "waybill": waybill.as_str() });

        rt.block_on(async {
            let resp = self
                .send_request(self.client.post(&url).json(&body), OPERATION)
                .await?;

            let status = resp.status();
            if status.as_u16() == 404 {
                return Err(CourierError::NotFound {
                    what: format!("waybill {waybill}"),
                });
            }
            if status.is_client_error() {
                let response_body = resp.text().await.unwrap_or_default();
                tracing::error!(operation = OPERATION, waybill = %waybill, status = %status, body = %response_body, "carrier rejected cancellation");
                return Err(CourierError::Rejected {
                    operation: OPERATION,
                    status: status.as_u16(),
                    body: response_body,
                });
            }

            tracing::info!(operation = OPERATION, waybill = %waybill, "shipment cancelled");
            Ok(Cancellation {
                success: true,
                message: "Shipment cancelled successfully".to_string(),
            })
        })
    }

    fn list_warehouses(&self) -> Result<Vec<Warehouse>, CourierError> {
        const OPERATION: &str = "list_warehouses";
        let rt = self.runtime_handle(OPERATION)?;

        let url = format!("{}/backend/clientwarehouse/all/", self.base_url);

        rt.block_on(async {
            let resp = self.send_request(self.client.get(&url), OPERATION).await?;

            if resp.status().is_client_error() {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                tracing::error!(operation = OPERATION, status, body = %body, "carrier rejected warehouse listing");
                return Err(CourierError::Rejected {
                    operation: OPERATION,
                    status,
                    body,
                });
            }

            let raw: Value = resp
                .json()
                .await
                .map_err(|e| Self::bad_response(OPERATION, format!("response deserialization failed: {e}")))?;

            wire::parse_warehouses(&raw)
                .ok_or_else(|| Self::bad_response(OPERATION, "warehouse list has an unrecognized shape"))
        })
    }

    fn adapter_name(&self) -> &str {
        "HttpCourierAdapter"
    }
}
