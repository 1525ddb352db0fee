//! Mapping from pipeline errors to HTTP responses.
//!
//! Every error becomes a flat `{"error": "..."}` JSON body. Internal failures
//! log the detail and return a generic message; the raw error never reaches
//! the client.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use scanpost_core::ScanError;
use serde_json::json;
use tracing::error;

/// Wrapper turning a [`ScanError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub ScanError);

impl From<ScanError> for ApiError {
    fn from(err: ScanError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ScanError::MissingField(_)
            | ScanError::MalformedBody(_)
            | ScanError::InvalidImage(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            ScanError::UnsupportedMediaType(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            ScanError::AddressNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            ScanError::UploadTooLarge { .. } => {
                (StatusCode::PAYLOAD_TOO_LARGE, self.0.to_string())
            }
            ScanError::OcrFailed { .. } | ScanError::TranslationFailed(_) => {
                error!(error = %self.0, "upstream stage failed");
                (StatusCode::BAD_GATEWAY, self.0.to_string())
            }
            ScanError::ConfigError(_)
            | ScanError::StorageError(_)
            | ScanError::Io(_)
            | ScanError::Other(_) => {
                error!(error = %self.0, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// JSON body extractor whose rejection keeps the `{"error": "..."}` shape.
///
/// Axum's stock `Json` rejection is a plain-text body; routing it through
/// [`ApiError`] keeps every error response on the wire contract.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ScanError::MalformedBody(rejection.body_text()).into()),
        }
    }
}
