//! Request and result value types for the courier gateway.

use serde::{Deserialize, Serialize};

use consign_core::{OrderNumber, PaymentMode, Phone, Pincode, Waybill};

/// Everything the carrier needs to create one shipment.
///
/// Immutable value object combining the parsed shipping address with the
/// order metadata; it exists only for the duration of one outbound call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Seller-side order reference, echoed as the carrier order id and
    /// the seller invoice number.
    pub order_number: OrderNumber,
    /// Recipient name as it should appear on the label.
    pub recipient_name: String,
    /// Delivery street address (street lines joined with `", "`).
    pub street: String,
    /// Delivery city.
    pub city: String,
    /// Delivery state.
    pub state: String,
    /// Delivery country.
    pub country: String,
    /// Delivery pincode.
    pub pincode: Pincode,
    /// Recipient phone.
    pub phone: Phone,
    /// How the order was paid; drives the carrier payment mode and the
    /// COD amount.
    pub payment_mode: PaymentMode,
    /// Order total as a decimal string (e.g. `"1499.00"`).
    pub total_amount: String,
    /// Free-text description of the contents.
    pub products_description: String,
    /// Number of items in the shipment.
    pub quantity: u32,
    /// Package weight in kilograms.
    pub weight_kg: f64,
    /// Package width in centimetres.
    pub shipment_width_cm: u32,
    /// Package height in centimetres.
    pub shipment_height_cm: u32,
    /// Order date, `YYYY-MM-DD HH:MM:SS`.
    pub order_date: String,
}

/// Outcome of a shipment-creation call.
///
/// `success` reflects the business outcome, not the transport outcome:
/// the carrier can answer HTTP 200 and still decline to assign a waybill
/// (an account hold, for instance). Transport failures never reach this
/// type; they surface as [`crate::CourierError`].
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentResult {
    /// Whether the carrier assigned a waybill.
    pub success: bool,
    /// The assigned waybill, when `success` is true.
    pub waybill: Option<Waybill>,
    /// Human-readable outcome message (carrier remark on rejection).
    pub message: String,
    /// The carrier's response payload, verbatim, for diagnosis and audit.
    pub raw_response: serde_json::Value,
}

/// One carrier-reported tracking checkpoint.
///
/// All fields default to the empty string when the carrier omits them,
/// keeping the snapshot shape stable for consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanEvent {
    /// When the scan happened.
    pub scan_date: String,
    /// Carrier scan type (e.g. `"UD"` for undelivered legs).
    pub scan_type: String,
    /// Free-text scan detail.
    pub scan_detail: String,
    /// Facility where the scan happened.
    pub location: String,
    /// Carrier instructions attached to the scan.
    pub instructions: String,
}

/// Point-in-time tracking state of a shipment.
///
/// Produced from one carrier tracking response; identical responses
/// produce identical snapshots. Missing fields default to `""`, except
/// `status` which defaults to `"Unknown"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingSnapshot {
    /// Waybill echoed by the carrier.
    pub waybill: String,
    /// Carrier status label (e.g. `"In Transit"`, `"Delivered"`).
    pub status: String,
    /// Carrier status code.
    pub status_code: String,
    /// When the carrier recorded the current status.
    pub status_date: String,
    /// Carrier's expected delivery date.
    pub expected_delivery: String,
    /// Latest location/instruction line from the carrier.
    pub current_location: String,
    /// Scan history, oldest first as the carrier reports it.
    pub scans: Vec<ScanEvent>,
}

/// Whether the carrier delivers to a pincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Serviceability {
    /// The pincode that was checked.
    pub pincode: Pincode,
    /// True iff the carrier returned a non-empty delivery-codes list.
    pub serviceable: bool,
}

/// Outcome of a cancellation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cancellation {
    /// Whether the carrier accepted the cancellation.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// A registered pickup warehouse, as listed by the carrier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Warehouse name registered with the carrier.
    #[serde(default)]
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Pincode.
    #[serde(default)]
    pub pin: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Whether the warehouse is active for pickups.
    #[serde(default)]
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use consign_core::OrderNumber;

    fn request() -> ShipmentRequest {
        ShipmentRequest {
            order_number: OrderNumber::new("ORD-2026-000451").unwrap(),
            recipient_name: "Rahul Singh".to_string(),
            street: "#12 MG Road".to_string(),
            city: "Ambala".to_string(),
            state: "Haryana".to_string(),
            country: "India".to_string(),
            pincode: Pincode::new("134003").unwrap(),
            phone: Phone::new("9876543210").unwrap(),
            payment_mode: PaymentMode::CashOnDelivery,
            total_amount: "1499.00".to_string(),
            products_description: "Ceramic dinner set".to_string(),
            quantity: 2,
            weight_kg: 0.5,
            shipment_width_cm: 10,
            shipment_height_cm: 10,
            order_date: "2026-08-01 10:15:00".to_string(),
        }
    }

    #[test]
    fn shipment_request_serde_round_trip() {
        let req = request();
        let json = serde_json::to_string(&req).expect("serialize");
        let back: ShipmentRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, req);
    }

    #[test]
    fn shipment_request_deserialize_validates_identifiers() {
        let req = request();
        let json = serde_json::to_string(&req)
            .unwrap()
            .replace("134003", "13400");
        let result: Result<ShipmentRequest, _> = serde_json::from_str(&json);
        assert!(result.is_err(), "5-digit pincode must be rejected");
    }

    #[test]
    fn tracking_snapshot_defaults_are_empty_strings() {
        let snapshot = TrackingSnapshot::default();
        assert_eq!(snapshot.status, "");
        assert_eq!(snapshot.expected_delivery, "");
        assert!(snapshot.scans.is_empty());
    }

    #[test]
    fn tracking_snapshot_serde_round_trip() {
        let snapshot = TrackingSnapshot {
            waybill: "46754510000044".to_string(),
            status: "In Transit".to_string(),
            status_code: "UD".to_string(),
            status_date: "2026-08-02T18:04:00".to_string(),
            expected_delivery: "2026-08-05".to_string(),
            current_location: "Ambala_Hub".to_string(),
            scans: vec![ScanEvent {
                scan_date: "2026-08-02T18:04:00".to_string(),
                scan_type: "UD".to_string(),
                scan_detail: "In Transit".to_string(),
                location: "Ambala_Hub".to_string(),
                instructions: "Shipment picked up".to_string(),
            }],
        };
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let back: TrackingSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, snapshot);
    }

    #[test]
    fn warehouse_deserializes_with_missing_fields() {
        let warehouse: Warehouse =
            serde_json::from_str(r#"{"name": "Zelton Ambala"}"#).expect("deserialize");
        assert_eq!(warehouse.name, "Zelton Ambala");
        assert_eq!(warehouse.city, "");
        assert!(!warehouse.active);
    }
}
