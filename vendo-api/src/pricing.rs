use axum::{extract::Query, routing::get, Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vendo_pricing::{compare_policies, quote, DiscountPolicy, PriceQuote};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pricing/quote", get(quote_price))
        .route("/pricing/compare", get(compare_prices))
}

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub original_price: Decimal,
    /// One of "percentage", "fixed", "progressive".
    pub policy: String,
    /// Percent (0-100) for "percentage", an amount for "fixed".
    pub value: Option<Decimal>,
}

async fn quote_price(Query(params): Query<QuoteParams>) -> Result<Json<PriceQuote>, AppError> {
    if params.original_price <= Decimal::ZERO {
        return Err(AppError::ValidationError(
            "original_price must be greater than zero".to_string(),
        ));
    }

    let policy = DiscountPolicy::from_selector(&params.policy, params.value)
        .map_err(|err| AppError::ValidationError(err.to_string()))?;

    Ok(Json(quote(&policy, params.original_price)))
}

#[derive(Debug, Deserialize)]
pub struct CompareParams {
    pub original_price: Decimal,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub original_price: Decimal,
    pub policies: Vec<String>,
}

async fn compare_prices(
    Query(params): Query<CompareParams>,
) -> Result<Json<CompareResponse>, AppError> {
    if params.original_price <= Decimal::ZERO {
        return Err(AppError::ValidationError(
            "original_price must be greater than zero".to_string(),
        ));
    }

    Ok(Json(CompareResponse {
        original_price: params.original_price,
        policies: compare_policies(params.original_price),
    }))
}
