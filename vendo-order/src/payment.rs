use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::StationError;

/// Charges at or above this amount are declined by the simulated gateway.
const AUTHORIZATION_CEILING: Decimal = dec!(1000);

/// Stand-in for the gateway's network round trip. Blocks the calling task
/// for its full duration; there is no cancellation.
const PROCESSING_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Approved,
    NotFound,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approved => write!(f, "APPROVED"),
            Self::NotFound => write!(f, "NOT_FOUND"),
        }
    }
}

/// Card validation and charge authorization. Declines are reported through
/// the return values; only backend faults surface as errors.
#[async_trait]
pub trait PaymentStation: Send + Sync {
    /// Basic card-shape validation. No field-level diagnostics.
    async fn validate_card(
        &self,
        card_number: &str,
        cvv: &str,
        expiry: &str,
    ) -> Result<bool, StationError>;

    /// Authorizes a charge, returning a reference token on approval and
    /// nothing on decline.
    async fn authorize(
        &self,
        amount: Decimal,
        card_number: &str,
    ) -> Result<Option<String>, StationError>;

    /// Classifies a reference token's shape. This only pattern-matches the
    /// token format and never reflects the real outcome of a prior
    /// authorization.
    async fn transaction_status(&self, reference: &str) -> Result<PaymentStatus, StationError>;
}

/// Deterministic gateway stand-in: authorization is a pure function of the
/// amount against a fixed ceiling.
#[derive(Debug, Default)]
pub struct SimulatedPayment;

impl SimulatedPayment {
    pub fn new() -> Self {
        Self
    }
}

fn is_expiry_shape(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

#[async_trait]
impl PaymentStation for SimulatedPayment {
    async fn validate_card(
        &self,
        card_number: &str,
        cvv: &str,
        expiry: &str,
    ) -> Result<bool, StationError> {
        let valid = card_number.len() >= 16 && cvv.len() == 3 && is_expiry_shape(expiry);
        tracing::debug!(valid, "payment: card validation");
        Ok(valid)
    }

    async fn authorize(
        &self,
        amount: Decimal,
        _card_number: &str,
    ) -> Result<Option<String>, StationError> {
        tracing::debug!(%amount, "payment: authorizing charge");
        tokio::time::sleep(PROCESSING_DELAY).await;

        if amount < AUTHORIZATION_CEILING {
            let reference = format!(
                "TXN-{}-{}",
                chrono::Utc::now().timestamp_millis(),
                &Uuid::new_v4().simple().to_string()[..8].to_uppercase()
            );
            tracing::info!(%reference, "payment: charge approved");
            Ok(Some(reference))
        } else {
            tracing::info!(%amount, "payment: charge declined, amount above ceiling");
            Ok(None)
        }
    }

    async fn transaction_status(&self, reference: &str) -> Result<PaymentStatus, StationError> {
        let status = if reference.starts_with("TXN") {
            PaymentStatus::Approved
        } else {
            PaymentStatus::NotFound
        };
        Ok(status)
    }
}
