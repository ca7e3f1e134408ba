//! Carrier wire formats.
//!
//! The carrier's CMU API has two quirks worth naming:
//!
//! - Shipment creation takes a body of the literal form
//!   `format=json&data=<JSON>` while still declaring
//!   `Content-Type: application/json`. The JSON is a `shipments` array
//!   nested under a single key.
//! - A successful creation response may carry the waybill at the top
//!   level, inside `packages[0]`, or not at all; the last case is a
//!   business rejection even on HTTP 200.
//!
//! This module owns serialization of the outbound payloads and the
//! tolerant deserialization of the inbound ones (missing tracking fields
//! collapse to empty strings so snapshots keep a stable shape).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CourierConfig;
use crate::types::{ScanEvent, ShipmentRequest, TrackingSnapshot};

/// Carrier default shipping mode for all shipments.
const SHIPPING_MODE: &str = "Surface";

/// Carrier default address type for consumer deliveries.
const ADDRESS_TYPE: &str = "home";

// ---------------------------------------------------------------------------
// Shipment creation (outbound)
// ---------------------------------------------------------------------------

/// Top-level creation payload: a `shipments` array under a single key.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePayload {
    /// The shipments to manifest; always exactly one per call here.
    pub shipments: Vec<WireShipment>,
}

/// One shipment in the carrier's creation vocabulary.
///
/// Field names are the carrier's, not ours; this struct exists solely to
/// be serialized into the `data=` body.
#[derive(Debug, Clone, Serialize)]
pub struct WireShipment {
    pub name: String,
    pub add: String,
    pub pin: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub phone: String,
    pub order: String,
    pub payment_mode: String,
    pub return_pin: String,
    pub return_city: String,
    pub return_phone: String,
    pub return_add: String,
    pub return_state: String,
    pub return_country: String,
    pub products_desc: String,
    pub hsn_code: String,
    pub cod_amount: String,
    pub order_date: String,
    pub total_amount: String,
    pub seller_add: String,
    pub seller_name: String,
    pub seller_inv: String,
    pub quantity: u32,
    pub waybill: String,
    pub shipment_width: u32,
    pub shipment_height: u32,
    pub weight: f64,
    pub seller_gst_tin: String,
    pub shipping_mode: String,
    pub address_type: String,
}

impl CreatePayload {
    /// Build the creation payload for one shipment, filling the return
    /// and seller blocks from the deployment configuration.
    pub fn for_request(request: &ShipmentRequest, config: &CourierConfig) -> Self {
        let return_address = &config.return_address;
        let cod_amount = match request.payment_mode {
            consign_core::PaymentMode::CashOnDelivery => request.total_amount.clone(),
            consign_core::PaymentMode::Prepaid => "0".to_string(),
        };

        Self {
            shipments: vec![WireShipment {
                name: request.recipient_name.clone(),
                add: request.street.clone(),
                pin: request.pincode.as_str().to_string(),
                city: request.city.clone(),
                state: request.state.clone(),
                country: request.country.clone(),
                phone: request.phone.as_str().to_string(),
                order: request.order_number.as_str().to_string(),
                payment_mode: request.payment_mode.wire_label().to_string(),
                return_pin: return_address.pincode.as_str().to_string(),
                return_city: return_address.city.clone(),
                return_phone: return_address.phone.as_str().to_string(),
                return_add: return_address.address.clone(),
                return_state: return_address.state.clone(),
                return_country: return_address.country.clone(),
                products_desc: request.products_description.clone(),
                hsn_code: String::new(),
                cod_amount,
                order_date: request.order_date.clone(),
                total_amount: request.total_amount.clone(),
                seller_add: return_address.address.clone(),
                seller_name: config.client_name.clone(),
                seller_inv: request.order_number.as_str().to_string(),
                quantity: request.quantity,
                waybill: String::new(),
                shipment_width: request.shipment_width_cm,
                shipment_height: request.shipment_height_cm,
                weight: request.weight_kg,
                seller_gst_tin: String::new(),
                shipping_mode: SHIPPING_MODE.to_string(),
                address_type: ADDRESS_TYPE.to_string(),
            }],
        }
    }

    /// Render the `format=json&data=<JSON>` request body.
    pub fn body(&self) -> Result<String, serde_json::Error> {
        Ok(format!("format=json&data={}", serde_json::to_string(self)?))
    }
}

/// Pull the waybill out of a creation response: the top-level `waybill`
/// field first, then `packages[0].waybill`. Empty strings count as
/// absent.
pub fn extract_waybill(raw: &Value) -> Option<&str> {
    let top = raw
        .get("waybill")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty());
    top.or_else(|| {
        raw.get("packages")?
            .get(0)?
            .get("waybill")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    })
}

/// Best-effort rejection message from a creation response that carries
/// no waybill: the top-level `rmk`, then `packages[0].remarks` (string
/// or array of strings), then a generic fallback.
pub fn rejection_message(raw: &Value) -> String {
    if let Some(rmk) = raw.get("rmk").and_then(Value::as_str) {
        if !rmk.is_empty() {
            return rmk.to_string();
        }
    }
    if let Some(remarks) = raw
        .get("packages")
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("remarks"))
    {
        match remarks {
            Value::String(s) if !s.is_empty() => return s.clone(),
            Value::Array(items) => {
                let joined: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                if !joined.is_empty() {
                    return joined.join("; ");
                }
            }
            _ => {}
        }
    }
    "carrier returned no waybill".to_string()
}

// ---------------------------------------------------------------------------
// Tracking (inbound)
// ---------------------------------------------------------------------------

/// Tracking response envelope: `{"ShipmentData": [...]}`.
#[derive(Debug, Default, Deserialize)]
pub struct TrackResponse {
    #[serde(rename = "ShipmentData", default)]
    pub shipment_data: Vec<TrackedShipment>,
}

/// One tracked shipment entry. Every field is optional: the carrier
/// omits or nulls fields freely.
#[derive(Debug, Default, Deserialize)]
pub struct TrackedShipment {
    #[serde(rename = "Waybill", default)]
    pub waybill: Option<String>,
    #[serde(rename = "Status", default)]
    pub status: Option<WireStatus>,
    #[serde(rename = "ExpectedDeliveryDate", default)]
    pub expected_delivery_date: Option<String>,
    #[serde(rename = "Scans", default)]
    pub scans: Option<Vec<WireScan>>,
}

/// The nested `Status` block of a tracked shipment.
#[derive(Debug, Default, Deserialize)]
pub struct WireStatus {
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
    #[serde(rename = "StatusCode", default)]
    pub status_code: Option<String>,
    #[serde(rename = "StatusDateTime", default)]
    pub status_date_time: Option<String>,
    #[serde(rename = "Instructions", default)]
    pub instructions: Option<String>,
}

/// One scan event as the carrier reports it.
#[derive(Debug, Default, Deserialize)]
pub struct WireScan {
    #[serde(rename = "ScanDateTime", default)]
    pub scan_date_time: Option<String>,
    #[serde(rename = "ScanType", default)]
    pub scan_type: Option<String>,
    #[serde(rename = "Scan", default)]
    pub scan: Option<String>,
    #[serde(rename = "ScannedLocation", default)]
    pub scanned_location: Option<String>,
    #[serde(rename = "Instructions", default)]
    pub instructions: Option<String>,
}

impl TrackedShipment {
    /// Collapse the carrier entry into a stable [`TrackingSnapshot`]:
    /// missing fields become `""`, a missing status becomes `"Unknown"`.
    pub fn into_snapshot(self) -> TrackingSnapshot {
        let status = self.status.unwrap_or_default();
        TrackingSnapshot {
            waybill: self.waybill.unwrap_or_default(),
            status: status.status.unwrap_or_else(|| "Unknown".to_string()),
            status_code: status.status_code.unwrap_or_default(),
            status_date: status.status_date_time.unwrap_or_default(),
            expected_delivery: self.expected_delivery_date.unwrap_or_default(),
            current_location: status.instructions.unwrap_or_default(),
            scans: self
                .scans
                .unwrap_or_default()
                .into_iter()
                .map(WireScan::into_event)
                .collect(),
        }
    }
}

impl WireScan {
    fn into_event(self) -> ScanEvent {
        ScanEvent {
            scan_date: self.scan_date_time.unwrap_or_default(),
            scan_type: self.scan_type.unwrap_or_default(),
            scan_detail: self.scan.unwrap_or_default(),
            location: self.scanned_location.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serviceability and warehouses (inbound)
// ---------------------------------------------------------------------------

/// Serviceability response: serviceable iff `delivery_codes` is
/// non-empty.
#[derive(Debug, Default, Deserialize)]
pub struct PincodeResponse {
    #[serde(default)]
    pub delivery_codes: Vec<Value>,
}

/// Parse the warehouse listing, which arrives either as a bare array or
/// wrapped in a `data` key depending on the API generation.
pub fn parse_warehouses(raw: &Value) -> Option<Vec<crate::types::Warehouse>> {
    let list = if raw.is_array() {
        raw.clone()
    } else {
        raw.get("data").cloned()?
    };
    serde_json::from_value(list).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CourierConfig;
    use consign_core::{OrderNumber, PaymentMode, Phone, Pincode};
    use serde_json::json;

    fn request(payment_mode: PaymentMode) -> ShipmentRequest {
        ShipmentRequest {
            order_number: OrderNumber::new("ORD-2026-000451").unwrap(),
            recipient_name: "Rahul Singh".to_string(),
            street: "#12 MG Road".to_string(),
            city: "Ambala".to_string(),
            state: "Haryana".to_string(),
            country: "India".to_string(),
            pincode: Pincode::new("134003").unwrap(),
            phone: Phone::new("9876543210").unwrap(),
            payment_mode,
            total_amount: "1499.00".to_string(),
            products_description: "Ceramic dinner set".to_string(),
            quantity: 2,
            weight_kg: 0.5,
            shipment_width_cm: 10,
            shipment_height_cm: 10,
            order_date: "2026-08-01 10:15:00".to_string(),
        }
    }

    fn config() -> CourierConfig {
        CourierConfig::new("https://track.example.com/api", "test-key", "Zelton").unwrap()
    }

    #[test]
    fn body_has_format_prefix_and_shipments_array() {
        let payload = CreatePayload::for_request(&request(PaymentMode::Prepaid), &config());
        let body = payload.body().expect("body");
        assert!(body.starts_with("format=json&data={"));
        assert!(body.contains("\"shipments\":[{"));
    }

    #[test]
    fn wire_shipment_carries_the_full_key_set() {
        let payload = CreatePayload::for_request(&request(PaymentMode::Prepaid), &config());
        let value = serde_json::to_value(&payload).expect("serialize");
        let shipment = &value["shipments"][0];

        for key in [
            "name",
            "add",
            "pin",
            "city",
            "state",
            "country",
            "phone",
            "order",
            "payment_mode",
            "return_pin",
            "return_city",
            "return_phone",
            "return_add",
            "return_state",
            "return_country",
            "products_desc",
            "hsn_code",
            "cod_amount",
            "order_date",
            "total_amount",
            "seller_add",
            "seller_name",
            "seller_inv",
            "quantity",
            "waybill",
            "shipment_width",
            "shipment_height",
            "weight",
            "seller_gst_tin",
            "shipping_mode",
            "address_type",
        ] {
            assert!(
                shipment.get(key).is_some(),
                "create payload is missing key {key:?}"
            );
        }

        assert_eq!(shipment["pin"], "134003");
        assert_eq!(shipment["order"], "ORD-2026-000451");
        assert_eq!(shipment["seller_inv"], "ORD-2026-000451");
        assert_eq!(shipment["seller_name"], "Zelton");
        assert_eq!(shipment["waybill"], "");
        assert_eq!(shipment["shipping_mode"], "Surface");
        assert_eq!(shipment["address_type"], "home");
    }

    #[test]
    fn cod_order_sets_cod_amount_to_total() {
        let payload = CreatePayload::for_request(&request(PaymentMode::CashOnDelivery), &config());
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["shipments"][0]["payment_mode"], "COD");
        assert_eq!(value["shipments"][0]["cod_amount"], "1499.00");
    }

    #[test]
    fn prepaid_order_zeroes_cod_amount() {
        let payload = CreatePayload::for_request(&request(PaymentMode::Prepaid), &config());
        let value = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(value["shipments"][0]["payment_mode"], "Prepaid");
        assert_eq!(value["shipments"][0]["cod_amount"], "0");
    }

    #[test]
    fn return_block_comes_from_config() {
        let payload = CreatePayload::for_request(&request(PaymentMode::Prepaid), &config());
        let value = serde_json::to_value(&payload).expect("serialize");
        let shipment = &value["shipments"][0];
        assert_eq!(shipment["return_city"], "Mumbai");
        assert_eq!(shipment["return_pin"], "400001");
        assert_eq!(shipment["return_country"], "India");
        assert_eq!(shipment["seller_add"], "Warehouse Address");
    }

    // -- extract_waybill --------------------------------------------------------

    #[test]
    fn waybill_extracted_from_top_level() {
        let raw = json!({"waybill": "46754510000044"});
        assert_eq!(extract_waybill(&raw), Some("46754510000044"));
    }

    #[test]
    fn waybill_extracted_from_first_package() {
        let raw = json!({"packages": [{"waybill": "46754510000044", "status": "Success"}]});
        assert_eq!(extract_waybill(&raw), Some("46754510000044"));
    }

    #[test]
    fn empty_waybill_counts_as_absent() {
        let raw = json!({"waybill": "", "packages": [{"waybill": ""}]});
        assert_eq!(extract_waybill(&raw), None);
        assert_eq!(extract_waybill(&json!({})), None);
    }

    #[test]
    fn rejection_message_prefers_rmk() {
        let raw = json!({"rmk": "ClientWarehouse not found", "packages": []});
        assert_eq!(rejection_message(&raw), "ClientWarehouse not found");
    }

    #[test]
    fn rejection_message_reads_package_remarks_array() {
        let raw = json!({"packages": [{"remarks": ["Suspicious order", "ER0005"]}]});
        assert_eq!(rejection_message(&raw), "Suspicious order; ER0005");
    }

    #[test]
    fn rejection_message_falls_back_to_generic() {
        assert_eq!(rejection_message(&json!({})), "carrier returned no waybill");
    }

    // -- tracking ---------------------------------------------------------------

    #[test]
    fn full_tracking_entry_maps_every_field() {
        let raw = json!({
            "ShipmentData": [{
                "Waybill": "46754510000044",
                "Status": {
                    "Status": "In Transit",
                    "StatusCode": "UD",
                    "StatusDateTime": "2026-08-02T18:04:00",
                    "Instructions": "Ambala_Hub"
                },
                "ExpectedDeliveryDate": "2026-08-05",
                "Scans": [{
                    "ScanDateTime": "2026-08-02T18:04:00",
                    "ScanType": "UD",
                    "Scan": "In Transit",
                    "ScannedLocation": "Ambala_Hub",
                    "Instructions": "Shipment picked up"
                }]
            }]
        });
        let response: TrackResponse = serde_json::from_value(raw).expect("deserialize");
        let snapshot = response
            .shipment_data
            .into_iter()
            .next()
            .expect("entry")
            .into_snapshot();

        assert_eq!(snapshot.waybill, "46754510000044");
        assert_eq!(snapshot.status, "In Transit");
        assert_eq!(snapshot.status_code, "UD");
        assert_eq!(snapshot.status_date, "2026-08-02T18:04:00");
        assert_eq!(snapshot.expected_delivery, "2026-08-05");
        assert_eq!(snapshot.current_location, "Ambala_Hub");
        assert_eq!(snapshot.scans.len(), 1);
        assert_eq!(snapshot.scans[0].scan_detail, "In Transit");
        assert_eq!(snapshot.scans[0].instructions, "Shipment picked up");
    }

    #[test]
    fn missing_tracking_fields_default_to_empty_strings() {
        let raw = json!({
            "ShipmentData": [{
                "Waybill": "46754510000044",
                "Status": {},
                "ExpectedDeliveryDate": null,
                "Scans": [{"ScanDateTime": null}]
            }]
        });
        let response: TrackResponse = serde_json::from_value(raw).expect("deserialize");
        let snapshot = response
            .shipment_data
            .into_iter()
            .next()
            .expect("entry")
            .into_snapshot();

        assert_eq!(snapshot.status, "Unknown");
        assert_eq!(snapshot.status_code, "");
        assert_eq!(snapshot.status_date, "");
        assert_eq!(snapshot.expected_delivery, "");
        assert_eq!(snapshot.current_location, "");
        assert_eq!(snapshot.scans[0], ScanEvent::default());
    }

    #[test]
    fn identical_payloads_produce_identical_snapshots() {
        let raw = json!({
            "ShipmentData": [{
                "Waybill": "WB-1",
                "Status": {"Status": "Delivered"},
                "Scans": []
            }]
        });
        let first: TrackResponse = serde_json::from_value(raw.clone()).expect("deserialize");
        let second: TrackResponse = serde_json::from_value(raw).expect("deserialize");
        let a = first.shipment_data.into_iter().next().unwrap().into_snapshot();
        let b = second.shipment_data.into_iter().next().unwrap().into_snapshot();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_shipment_data_deserializes_to_empty_vec() {
        let response: TrackResponse = serde_json::from_value(json!({})).expect("deserialize");
        assert!(response.shipment_data.is_empty());
    }

    // -- serviceability / warehouses --------------------------------------------

    #[test]
    fn pincode_response_defaults_to_no_delivery_codes() {
        let response: PincodeResponse = serde_json::from_value(json!({})).expect("deserialize");
        assert!(response.delivery_codes.is_empty());

        let response: PincodeResponse =
            serde_json::from_value(json!({"delivery_codes": [{"postal_code": {"pin": 134003}}]}))
                .expect("deserialize");
        assert_eq!(response.delivery_codes.len(), 1);
    }

    #[test]
    fn warehouses_parse_from_bare_array_and_data_wrapper() {
        let bare = json!([{"name": "Zelton Ambala", "city": "Ambala"}]);
        let wrapped = json!({"data": [{"name": "Zelton Ambala", "city": "Ambala"}]});

        let from_bare = parse_warehouses(&bare).expect("bare array");
        let from_wrapped = parse_warehouses(&wrapped).expect("data wrapper");
        assert_eq!(from_bare, from_wrapped);
        assert_eq!(from_bare[0].name, "Zelton Ambala");
    }

    #[test]
    fn unrecognized_warehouse_shape_is_none() {
        assert!(parse_warehouses(&json!({"unexpected": true})).is_none());
        assert!(parse_warehouses(&json!("nope")).is_none());
    }
}
