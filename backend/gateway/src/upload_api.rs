//! Multipart label photo upload.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use scanpost_core::ScanError;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::server::GatewayState;

/// Handler for `POST /api/upload`
///
/// Expects a multipart form with an `image` field. The file is validated
/// against the accepted photo formats and stored under a generated name.
pub async fn upload_image(
    State(state): State<GatewayState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let limit = state.uploads.max_bytes();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let declared_mime = field.content_type().map(|m| m.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, limit))?;

        let stored = state
            .uploads
            .save(&original_name, declared_mime.as_deref(), data)
            .await?;

        return Ok(Json(json!({
            "message": "file uploaded successfully",
            "filename": stored.file_name,
            "path": stored.path,
            "mimeType": stored.mime_type,
            "sizeBytes": stored.size_bytes,
        })));
    }

    Err(ScanError::MissingField("image").into())
}

/// A multipart read aborted by the body-size layer is an oversize upload,
/// not a malformed one.
fn multipart_error(err: MultipartError, limit: usize) -> ScanError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ScanError::UploadTooLarge { limit }
    } else {
        ScanError::InvalidImage(err.to_string())
    }
}
