use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vendo_order::{Availability, OrderOutcome, OrderRequest, ShippingQuote};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(process_order))
        .route("/orders/availability", get(check_availability))
        .route("/orders/shipping-quote", get(shipping_quote))
        .route("/orders/status", get(order_status))
}

/// Rejects malformed requests before the pipeline is touched. Declines from
/// the pipeline itself come back as 200 with `success: false`.
fn validate(request: &OrderRequest) -> Result<(), AppError> {
    let mut problems = Vec::new();

    if request.product_id.trim().is_empty() {
        problems.push("product_id must not be empty");
    }
    if request.quantity < 1 {
        problems.push("quantity must be at least 1");
    }
    if request.amount <= Decimal::ZERO {
        problems.push("amount must be greater than zero");
    }
    if request.card_number.trim().is_empty() {
        problems.push("card_number must not be empty");
    }
    if request.cvv.len() < 3 || request.cvv.len() > 4 {
        problems.push("cvv must be 3 or 4 characters");
    }
    if request.card_expiry.trim().is_empty() {
        problems.push("card_expiry must not be empty");
    }
    if request.address.trim().is_empty() {
        problems.push("address must not be empty");
    }
    if request.destination_code.trim().is_empty() {
        problems.push("destination_code must not be empty");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::ValidationError(problems.join("; ")))
    }
}

async fn process_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> Result<Json<OrderOutcome>, AppError> {
    validate(&request)?;
    Ok(Json(state.pipeline.process_order(&request).await))
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub product_id: String,
    pub quantity: u32,
}

async fn check_availability(
    State(state): State<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<Availability>, AppError> {
    if params.product_id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "product_id must not be empty".to_string(),
        ));
    }
    if params.quantity < 1 {
        return Err(AppError::ValidationError(
            "quantity must be at least 1".to_string(),
        ));
    }

    let availability = state
        .pipeline
        .check_availability(&params.product_id, params.quantity)
        .await?;
    Ok(Json(availability))
}

#[derive(Debug, Deserialize)]
pub struct ShippingParams {
    pub destination_code: String,
}

async fn shipping_quote(
    State(state): State<AppState>,
    Query(params): Query<ShippingParams>,
) -> Result<Json<ShippingQuote>, AppError> {
    if params.destination_code.trim().is_empty() {
        return Err(AppError::ValidationError(
            "destination_code must not be empty".to_string(),
        ));
    }

    let quote = state
        .pipeline
        .shipping_quote(&params.destination_code)
        .await?;
    Ok(Json(quote))
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub order_id: String,
    pub transaction_id: String,
    pub tracking_code: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub order_id: String,
    pub status: String,
}

async fn order_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Json<StatusResponse>, AppError> {
    let status = state
        .pipeline
        .order_status(&params.order_id, &params.transaction_id, &params.tracking_code)
        .await?;

    Ok(Json(StatusResponse {
        order_id: params.order_id,
        status,
    }))
}
