use axum::{extract::State, http::StatusCode, response::Json};
use prometheus::TextEncoder;
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "motolens-api-gateway",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
    let encoder = TextEncoder::new();
    let metric_families = state.metrics.registry().gather();

    encoder
        .encode_to_string(&metric_families)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("Error encoding metrics: {}", e)))
}
