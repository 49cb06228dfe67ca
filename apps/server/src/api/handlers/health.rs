use axum::{response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::models::iso_timestamp;

/// Liveness only; the store is not consulted.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "message": "Drug Inventory API is running",
        "timestamp": iso_timestamp(&Utc::now()),
    }))
}
