use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchase request, built by the caller and consumed once by the
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub product_id: String,
    pub quantity: u32,
    /// Merchandise price before shipping.
    pub amount: Decimal,
    pub card_number: String,
    pub cvv: String,
    /// Card expiry in MM/YY form.
    pub card_expiry: String,
    pub address: String,
    /// Buckets the delivery into a shipping zone by its leading digit.
    pub destination_code: String,
}

/// The unified result of one pipeline run. On success the identifier fields
/// are populated; on a decline only the message is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderOutcome {
    pub success: bool,
    pub message: String,
    pub order_id: Option<String>,
    pub payment_reference: Option<String>,
    pub tracking_code: Option<String>,
}

impl OrderOutcome {
    pub fn completed(order_id: String, payment_reference: String, tracking_code: String) -> Self {
        Self {
            success: true,
            message: "order processed successfully".to_string(),
            order_id: Some(order_id),
            payment_reference: Some(payment_reference),
            tracking_code: Some(tracking_code),
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            order_id: None,
            payment_reference: None,
            tracking_code: None,
        }
    }
}

/// Answer to a stock-availability query. A pure projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub product_id: String,
    pub requested_quantity: u32,
    pub available: bool,
}

/// Shipping cost and lead time for a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub destination_code: String,
    pub cost: Decimal,
    pub estimated_days: u32,
}
