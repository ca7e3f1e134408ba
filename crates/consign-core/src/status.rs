//! Order and payment vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal order lifecycle status.
///
/// This is the caller-side vocabulary the carrier-status reconciliation
/// table maps into. Serialized in snake_case to match the order record's
/// `status` column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order placed, payment not yet settled or confirmed.
    Pending,
    /// Payment confirmed, shipment not yet handed to a courier.
    Processing,
    /// Shipment created and in the courier network.
    Shipped,
    /// Courier reported successful delivery.
    Delivered,
    /// Order cancelled, including courier RTO (return to origin).
    Cancelled,
}

impl OrderStatus {
    /// Snake_case label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!(
                "unknown order status {other:?} (expected one of: pending, processing, shipped, delivered, cancelled)"
            )),
        }
    }
}

/// How the customer pays for an order.
///
/// Serialized in snake_case (`"cash_on_delivery"` / `"prepaid"`), the
/// order record's `payment_method` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Collect payment from the recipient at the door.
    CashOnDelivery,
    /// Paid online before shipment.
    Prepaid,
}

impl PaymentMode {
    /// The label the carrier wire format expects (`"COD"` / `"Prepaid"`).
    pub fn wire_label(&self) -> &'static str {
        match self {
            Self::CashOnDelivery => "COD",
            Self::Prepaid => "Prepaid",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_serde_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).expect("serialize OrderStatus");
            let back: OrderStatus = serde_json::from_str(&json).expect("deserialize OrderStatus");
            assert_eq!(status, back);
        }
    }

    #[test]
    fn order_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Shipped).unwrap(),
            "\"shipped\""
        );
        assert_eq!(OrderStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn payment_mode_serde_matches_order_record_vocabulary() {
        assert_eq!(
            serde_json::to_string(&PaymentMode::CashOnDelivery).unwrap(),
            "\"cash_on_delivery\""
        );
        let back: PaymentMode = serde_json::from_str("\"prepaid\"").unwrap();
        assert_eq!(back, PaymentMode::Prepaid);
    }

    #[test]
    fn order_status_parses_from_snake_case() {
        let status: OrderStatus = "shipped".parse().unwrap();
        assert_eq!(status, OrderStatus::Shipped);
        assert!("Shipped".parse::<OrderStatus>().is_err());
        assert!("unknown".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn payment_mode_wire_labels() {
        assert_eq!(PaymentMode::CashOnDelivery.wire_label(), "COD");
        assert_eq!(PaymentMode::Prepaid.wire_label(), "Prepaid");
    }
}
