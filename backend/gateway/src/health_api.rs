//! Gateway Health API
//!
//! Exposes a public endpoint reporting the gateway process itself.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::server::GatewayState;

/// Handler for `GET /api/health`
pub async fn get_health(State(state): State<GatewayState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "scanpost",
        "version": env!("CARGO_PKG_VERSION"),
        "ocrEngine": state.ocr.name(),
        "timestamp": Utc::now(),
    }))
}
