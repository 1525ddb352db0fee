//! Address record endpoints: submission, listing, and lookup.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scanpost_core::{AddressRecord, AddressSubmission, ScanError};
use serde_json::{json, Value};
use tracing::info;

use crate::error::{ApiError, ApiJson};
use crate::server::GatewayState;

/// Handler for `POST /api/address`
///
/// Rejects with 400 when full name, address line 1, or postal code is
/// missing; otherwise stores the record and returns it with its new id.
pub async fn submit_address(
    State(state): State<GatewayState>,
    ApiJson(submission): ApiJson<AddressSubmission>,
) -> Result<(StatusCode, Json<AddressRecord>), ApiError> {
    submission.validate()?;
    let record = state.store.insert(submission).await;
    info!(id = record.id, "address submitted");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for `GET /api/addresses`
pub async fn list_addresses(State(state): State<GatewayState>) -> Json<Value> {
    let addresses = state.store.list().await;
    Json(json!({
        "count": addresses.len(),
        "addresses": addresses,
    }))
}

/// Handler for `GET /api/address/:id`
pub async fn get_address(
    State(state): State<GatewayState>,
    Path(id): Path<u64>,
) -> Result<Json<AddressRecord>, ApiError> {
    let record = state
        .store
        .get(id)
        .await
        .ok_or(ScanError::AddressNotFound(id))?;
    Ok(Json(record))
}
