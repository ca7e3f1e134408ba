//! Deterministic in-memory courier adapter for tests and development.

use consign_core::{Pincode, Waybill};

use crate::adapter::CourierAdapter;
use crate::error::CourierError;
use crate::types::{
    Cancellation, ScanEvent, Serviceability, ShipmentRequest, ShipmentResult, TrackingSnapshot,
    Warehouse,
};

/// Mock courier adapter returning deterministic data driven by input
/// conventions:
///
/// - Pincodes starting with `9` are unserviceable; creating a shipment
///   to one is a business rejection (`success = false`).
/// - Created waybills are `MOCK-<order number>`.
/// - Waybills starting with `0` are unknown ([`CourierError::NotFound`]).
/// - The tracked status follows the waybill's last character:
///   `4` → `"Out for Delivery"`, `5` → `"Delivered"`, `6` → `"RTO"`,
///   `7` → `"Cancelled"`, anything else → `"In Transit"`.
/// - Cancelling a delivered shipment (last character `5`) is rejected.
///
/// Identical inputs always produce identical outputs, so snapshot
/// comparisons in tests are stable.
#[derive(Debug, Clone, Default)]
pub struct MockCourierAdapter;

impl MockCourierAdapter {
    /// Create a new mock adapter.
    pub fn new() -> Self {
        Self
    }

    fn carrier_status_for(waybill: &Waybill) -> &'static str {
        match waybill.as_str().chars().last() {
            Some('4') => "Out for Delivery",
            Some('5') => "Delivered",
            Some('6') => "RTO",
            Some('7') => "Cancelled",
            _ => "In Transit",
        }
    }

    fn is_unknown(waybill: &Waybill) -> bool {
        waybill.as_str().starts_with('0')
    }
}

impl CourierAdapter for MockCourierAdapter {
    fn create_shipment(&self, request: &ShipmentRequest) -> Result<ShipmentResult, CourierError> {
        if request.pincode.as_str().starts_with('9') {
            return Ok(ShipmentResult {
                success: false,
                waybill: None,
                message: format!("pincode {} is not serviceable", request.pincode),
                raw_response: serde_json::json!({ "packages": [], "rmk": "Pin code not serviceable" }),
            });
        }

        // Waybill charset is alphanumeric-plus-dash, same as order numbers,
        // so this stays valid as long as it fits.
        let label: String = request
            .order_number
            .as_str()
            .chars()
            .take(27)
            .collect();
        let waybill = Waybill::new(format!("MOCK-{label}"))?;

        Ok(ShipmentResult {
            success: true,
            waybill: Some(waybill.clone()),
            message: "Shipment created successfully".to_string(),
            raw_response: serde_json::json!({
                "waybill": waybill.as_str(),
                "packages": [{ "waybill": waybill.as_str(), "status": "Success" }],
            }),
        })
    }

    fn track_shipment(&self, waybill: &Waybill) -> Result<TrackingSnapshot, CourierError> {
        if Self::is_unknown(waybill) {
            return Err(CourierError::NotFound {
                what: format!("waybill {waybill}"),
            });
        }

        let status = Self::carrier_status_for(waybill);
        Ok(TrackingSnapshot {
            waybill: waybill.as_str().to_string(),
            status: status.to_string(),
            status_code: "UD".to_string(),
            status_date: "2026-08-02T18:04:00".to_string(),
            expected_delivery: "2026-08-05".to_string(),
            current_location: "Mock_Hub".to_string(),
            scans: vec![
                ScanEvent {
                    scan_date: "2026-08-01T09:12:00".to_string(),
                    scan_type: "UD".to_string(),
                    scan_detail: "Manifested".to_string(),
                    location: "Mock_Origin".to_string(),
                    instructions: "Shipment manifested".to_string(),
                },
                ScanEvent {
                    scan_date: "2026-08-02T18:04:00".to_string(),
                    scan_type: "UD".to_string(),
                    scan_detail: status.to_string(),
                    location: "Mock_Hub".to_string(),
                    instructions: String::new(),
                },
            ],
        })
    }

    fn check_serviceability(&self, pincode: &Pincode) -> Result<Serviceability, CourierError> {
        Ok(Serviceability {
            pincode: pincode.clone(),
            serviceable: !pincode.as_str().starts_with('9'),
        })
    }

    fn cancel_shipment(&self, waybill: &Waybill) -> Result<Cancellation, CourierError> {
        if Self::is_unknown(waybill) {
            return Err(CourierError::NotFound {
                what: format!("waybill {waybill}"),
            });
        }
        if Self::carrier_status_for(waybill) == "Delivered" {
            return Err(CourierError::Rejected {
                operation: "cancel_shipment",
                status: 400,
                body: "cannot cancel a delivered shipment".to_string(),
            });
        }
        Ok(Cancellation {
            success: true,
            message: "Shipment cancelled successfully".to_string(),
        })
    }

    fn list_warehouses(&self) -> Result<Vec<Warehouse>, CourierError> {
        Ok(vec![
            Warehouse {
                name: "Mock Warehouse Mumbai".to_string(),
                address: "Warehouse Address".to_string(),
                city: "Mumbai".to_string(),
                pin: "400001".to_string(),
                phone: "9999999999".to_string(),
                active: true,
            },
            Warehouse {
                name: "Mock Warehouse Ambala".to_string(),
                address: "#129 Naib Colony".to_string(),
                city: "Ambala".to_string(),
                pin: "134003".to_string(),
                phone: "9729310456".to_string(),
                active: false,
            },
        ])
    }

    fn adapter_name(&self) -> &str {
        "MockCourierAdapter"
    }
}
