//! Scanning pipeline endpoints: OCR, language detection, translation, and
//! heuristic address parsing. Each stage is exposed on its own so the review
//! UI can re-run any step after a manual correction.

use axum::extract::State;
use axum::Json;
use scanpost_core::{Language, ParsedAddress};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use scanpost_logging::redact_personal_data;
use scanpost_scan::ocr::decode_image_payload;
use scanpost_scan::translate::translate_if_needed;

use crate::error::{ApiError, ApiJson};
use crate::server::GatewayState;

#[derive(Deserialize)]
pub struct OcrRequest {
    /// Base64 image data, optionally as a `data:` URL.
    #[serde(default)]
    pub image: String,
}

/// Handler for `POST /api/ocr`
pub async fn run_ocr(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<OcrRequest>,
) -> Result<Json<Value>, ApiError> {
    let image = decode_image_payload(&body.image)?;
    let text = state.ocr.extract_text(&image).await?;
    info!(
        engine = state.ocr.name(),
        text = %redact_personal_data(&text),
        "OCR extracted text"
    );
    Ok(Json(json!({ "text": text, "engine": state.ocr.name() })))
}

#[derive(Deserialize)]
pub struct DetectLanguageRequest {
    #[serde(default)]
    pub text: String,
}

/// Handler for `POST /api/detect-language`
pub async fn detect_language(
    ApiJson(body): ApiJson<DetectLanguageRequest>,
) -> Json<Value> {
    let language = scanpost_scan::detect_language(&body.text);
    Json(json!({ "language": language }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateApiRequest {
    #[serde(default)]
    pub text: String,
    /// Detected by the caller; inferred from the text when absent.
    pub source_language: Option<Language>,
    /// Defaults to the configured target.
    pub target_language: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateApiResponse {
    pub translated_text: String,
    pub source_language: Language,
    pub target_language: String,
}

/// Handler for `POST /api/translate`
pub async fn translate(
    State(state): State<GatewayState>,
    ApiJson(body): ApiJson<TranslateApiRequest>,
) -> Result<Json<TranslateApiResponse>, ApiError> {
    let source = body
        .source_language
        .unwrap_or_else(|| scanpost_scan::detect_language(&body.text));
    let target = body
        .target_language
        .unwrap_or_else(|| state.target_language.clone());

    let translated =
        translate_if_needed(state.translator.as_ref(), &body.text, source, &target).await?;

    Ok(Json(TranslateApiResponse {
        translated_text: translated,
        source_language: source,
        target_language: target,
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseAddressRequest {
    #[serde(default)]
    pub address_text: String,
}

/// Handler for `POST /api/parse-address`
pub async fn parse_address(ApiJson(body): ApiJson<ParseAddressRequest>) -> Json<ParsedAddress> {
    Json(scanpost_scan::parse_address(&body.address_text))
}
