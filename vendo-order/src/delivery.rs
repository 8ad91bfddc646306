use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use vendo_core::hash::stable_hash;

use crate::StationError;

// Zone table, keyed by the destination code's leading digit. Costs and
// lead times grow strictly from the near zone out.
const NEAR_ZONE_COST: Decimal = dec!(15.50);
const MID_ZONE_COST: Decimal = dec!(25.00);
const FAR_ZONE_COST: Decimal = dec!(35.00);
const NEAR_ZONE_DAYS: u32 = 2;
const MID_ZONE_DAYS: u32 = 5;
const FAR_ZONE_DAYS: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    InPreparation,
    InTransit,
    Delivered,
    AwaitingPickup,
    InvalidCode,
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::InPreparation => "IN_PREPARATION",
            Self::InTransit => "IN_TRANSIT",
            Self::Delivered => "DELIVERED",
            Self::AwaitingPickup => "AWAITING_PICKUP",
            Self::InvalidCode => "INVALID_CODE",
        };
        write!(f, "{}", label)
    }
}

/// Shipping quotes, shipment scheduling, and the tracking-status oracle.
#[async_trait]
pub trait DeliveryStation: Send + Sync {
    /// Shipping cost for a destination. Pure.
    async fn shipping_cost(&self, destination_code: &str) -> Result<Decimal, StationError>;

    /// Estimated lead time in whole days. Pure.
    async fn estimate_days(&self, destination_code: &str) -> Result<u32, StationError>;

    /// Schedules a shipment and returns a fresh tracking token. Cannot
    /// fail for business reasons.
    async fn schedule(
        &self,
        order_id: &str,
        address: &str,
        destination_code: &str,
    ) -> Result<String, StationError>;

    /// Simulated status oracle: a pure function of the token, not a real
    /// carrier lookup. Tokens that do not match the expected shape map to
    /// `InvalidCode`.
    async fn delivery_status(&self, tracking_code: &str) -> Result<DeliveryStatus, StationError>;
}

/// Zone-bucketed carrier stand-in.
#[derive(Debug, Default)]
pub struct SimulatedDelivery;

impl SimulatedDelivery {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeliveryStation for SimulatedDelivery {
    async fn shipping_cost(&self, destination_code: &str) -> Result<Decimal, StationError> {
        let cost = match destination_code.as_bytes().first() {
            Some(b'0') => NEAR_ZONE_COST,
            Some(b'1') => MID_ZONE_COST,
            _ => FAR_ZONE_COST,
        };
        tracing::debug!(destination_code, %cost, "delivery: shipping cost");
        Ok(cost)
    }

    async fn estimate_days(&self, destination_code: &str) -> Result<u32, StationError> {
        let days = match destination_code.as_bytes().first() {
            Some(b'0') => NEAR_ZONE_DAYS,
            Some(b'1') => MID_ZONE_DAYS,
            _ => FAR_ZONE_DAYS,
        };
        Ok(days)
    }

    async fn schedule(
        &self,
        order_id: &str,
        address: &str,
        destination_code: &str,
    ) -> Result<String, StationError> {
        let tracking_code = format!(
            "TRK-{}-{}",
            order_id,
            chrono::Utc::now().timestamp_millis() % 10_000
        );
        tracing::info!(
            order_id,
            address,
            destination_code,
            %tracking_code,
            "delivery: shipment scheduled"
        );
        Ok(tracking_code)
    }

    async fn delivery_status(&self, tracking_code: &str) -> Result<DeliveryStatus, StationError> {
        if !tracking_code.starts_with("TRK") {
            return Ok(DeliveryStatus::InvalidCode);
        }

        let status = match stable_hash(tracking_code) % 4 {
            0 => DeliveryStatus::InPreparation,
            1 => DeliveryStatus::InTransit,
            2 => DeliveryStatus::Delivered,
            _ => DeliveryStatus::AwaitingPickup,
        };
        Ok(status)
    }
}
