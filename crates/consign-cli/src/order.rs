//! Order JSON documents consumed by `consign create`.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use consign_address::{parse_address, ProfileFallback};
use consign_core::{OrderNumber, PaymentMode, Phone};
use consign_courier_client::ShipmentRequest;

fn default_quantity() -> u32 {
    1
}

/// The slice of an order record the CLI needs to build a shipment:
/// the raw shipping address plus order metadata. Field names mirror the
/// order table columns so a document can be produced with a single
/// query.
#[derive(Debug, Deserialize)]
pub struct OrderDocument {
    /// Seller-side order reference.
    pub order_number: OrderNumber,
    /// Free-text shipping address, newline-delimited.
    pub shipping_address: String,
    /// Account name, used when the address omits the name line.
    #[serde(default)]
    pub customer_name: Option<String>,
    /// Account phone, used when the address omits the phone line.
    #[serde(default)]
    pub customer_phone: Option<Phone>,
    /// `"cash_on_delivery"` or `"prepaid"`.
    pub payment_method: PaymentMode,
    /// Order total.
    pub total: f64,
    /// Item count; defaults to 1.
    #[serde(default = "default_quantity")]
    pub total_items: u32,
    /// Contents description; defaults to `"General Items"`.
    #[serde(default)]
    pub products_description: Option<String>,
    /// Destination country; defaults to `"India"`.
    #[serde(default)]
    pub country: Option<String>,
    /// Package weight in kilograms; defaults to 0.5.
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Package width in centimetres; defaults to 10.
    #[serde(default)]
    pub width_cm: Option<u32>,
    /// Package height in centimetres; defaults to 10.
    #[serde(default)]
    pub height_cm: Option<u32>,
    /// Order date `YYYY-MM-DD HH:MM:SS`; defaults to the current time.
    #[serde(default)]
    pub order_date: Option<String>,
}

impl OrderDocument {
    /// Parse the shipping address and assemble the carrier request.
    pub fn to_shipment_request(&self, now: DateTime<Utc>) -> anyhow::Result<ShipmentRequest> {
        let fallback = ProfileFallback {
            name: self.customer_name.clone(),
            phone: self.customer_phone.clone(),
        };
        let address = parse_address(&self.shipping_address, &fallback)
            .context("shipping address is not usable for shipment creation")?;

        Ok(ShipmentRequest {
            order_number: self.order_number.clone(),
            recipient_name: address.name,
            street: address.street,
            city: address.city,
            state: address.state,
            country: self.country.clone().unwrap_or_else(|| "India".to_string()),
            pincode: address.pincode,
            phone: address.phone,
            payment_mode: self.payment_method,
            total_amount: format!("{:.2}", self.total),
            products_description: self
                .products_description
                .clone()
                .unwrap_or_else(|| "General Items".to_string()),
            quantity: self.total_items,
            weight_kg: self.weight_kg.unwrap_or(0.5),
            shipment_width_cm: self.width_cm.unwrap_or(10),
            shipment_height_cm: self.height_cm.unwrap_or(10),
            order_date: self
                .order_date
                .clone()
                .unwrap_or_else(|| now.format("%Y-%m-%d %H:%M:%S").to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 3, 12, 0, 0).unwrap()
    }

    #[test]
    fn minimal_document_fills_defaults() {
        let doc: OrderDocument = serde_json::from_str(
            r#"{
                "order_number": "ORD-2026-000451",
                "shipping_address": "Rahul Singh\n9876543210\n#12 MG Road\nAmbala, Haryana 134003",
                "payment_method": "prepaid",
                "total": 1499.5
            }"#,
        )
        .expect("deserialize");

        let request = doc.to_shipment_request(now()).expect("request");
        assert_eq!(request.order_number.as_str(), "ORD-2026-000451");
        assert_eq!(request.recipient_name, "Rahul Singh");
        assert_eq!(request.city, "Ambala");
        assert_eq!(request.pincode.as_str(), "134003");
        assert_eq!(request.total_amount, "1499.50");
        assert_eq!(request.quantity, 1);
        assert_eq!(request.country, "India");
        assert_eq!(request.products_description, "General Items");
        assert_eq!(request.weight_kg, 0.5);
        assert_eq!(request.order_date, "2026-08-03 12:00:00");
    }

    #[test]
    fn document_overrides_win_over_defaults() {
        let doc: OrderDocument = serde_json::from_str(
            r#"{
                "order_number": "ORD-1",
                "shipping_address": "Rahul Singh\n9876543210\n#12 MG Road\nAmbala, Haryana 134003",
                "payment_method": "cash_on_delivery",
                "total": 100,
                "total_items": 3,
                "products_description": "Ceramic dinner set",
                "weight_kg": 1.25,
                "width_cm": 20,
                "height_cm": 15,
                "order_date": "2026-08-01 10:15:00"
            }"#,
        )
        .expect("deserialize");

        let request = doc.to_shipment_request(now()).expect("request");
        assert_eq!(request.payment_mode, PaymentMode::CashOnDelivery);
        assert_eq!(request.quantity, 3);
        assert_eq!(request.weight_kg, 1.25);
        assert_eq!(request.shipment_width_cm, 20);
        assert_eq!(request.order_date, "2026-08-01 10:15:00");
    }

    #[test]
    fn profile_fallbacks_supply_missing_lines() {
        let doc: OrderDocument = serde_json::from_str(
            r##"{
                "order_number": "ORD-1",
                "shipping_address": "#12 MG Road\n9876543210\nStreet 2\nAmbala, Haryana 134003",
                "customer_name": "Priya Nair",
                "customer_phone": "+91 90000 00001",
                "payment_method": "prepaid",
                "total": 100
            }"##,
        )
        .expect("deserialize");

        // Positional parsing: the first line is still taken as the name;
        // the profile values only apply when lines are absent entirely.
        let request = doc.to_shipment_request(now()).expect("request");
        assert_eq!(request.recipient_name, "#12 MG Road");
        assert_eq!(request.phone.as_str(), "9876543210");
    }

    #[test]
    fn unparseable_address_fails_with_context() {
        let doc: OrderDocument = serde_json::from_str(
            r#"{
                "order_number": "ORD-1",
                "shipping_address": "Rahul Singh\n9876543210\nno locality here",
                "payment_method": "prepaid",
                "total": 100
            }"#,
        )
        .expect("deserialize");

        let err = doc.to_shipment_request(now()).unwrap_err();
        assert!(err.to_string().contains("not usable"));
    }
}
