use axum::{extract::State, routing::get, Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/app-info", get(app_info))
}

async fn app_info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let info = &state.app_info;
    Json(json!({
        "name": info.name(),
        "version": info.version(),
        "environment": info.environment(),
        "summary": info.summary(),
    }))
}
