//! Main HTTP Gateway Server.
//!
//! Wires the pipeline stages and the record store into one Axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;

use scanpost_config::{OcrEngineKind, ScanpostConfig};
use scanpost_media::UploadStore;
use scanpost_registry::AddressStore;
use scanpost_scan::{
    FixtureEngine, HttpTranslator, OcrEngine, PassthroughTranslator, TesseractEngine, Translator,
};

use crate::rate_limit::{self, RateLimiter};
use crate::{address_api, health_api, scan_api, upload_api};

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub store: AddressStore,
    pub uploads: Arc<UploadStore>,
    pub ocr: Arc<dyn OcrEngine>,
    pub translator: Arc<dyn Translator>,
    pub limiter: RateLimiter,
    /// Language code translations are requested into.
    pub target_language: String,
}

impl GatewayState {
    /// Build the state from a loaded config, selecting pipeline providers.
    pub fn from_config(config: &ScanpostConfig) -> Self {
        let ocr: Arc<dyn OcrEngine> = match config.ocr.engine {
            OcrEngineKind::Tesseract => Arc::new(TesseractEngine::new(
                config.ocr.tesseract_bin.clone(),
                config.ocr.languages.clone(),
            )),
            OcrEngineKind::Fixture => Arc::new(FixtureEngine::new(config.ocr.fixture_text.clone())),
        };

        let translator: Arc<dyn Translator> = match &config.translate.endpoint {
            Some(endpoint) => Arc::new(HttpTranslator::new(endpoint.clone())),
            None => Arc::new(PassthroughTranslator),
        };

        Self {
            store: AddressStore::new(),
            uploads: Arc::new(UploadStore::new(
                config.upload.dir.clone(),
                config.upload.max_bytes,
            )),
            ocr,
            translator,
            limiter: RateLimiter::new(
                config.rate_limit.max_requests,
                config.rate_limit.window_secs,
                config.rate_limit.trust_proxy,
            ),
            target_language: config.translate.target_language.clone(),
        }
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/api/health", get(health_api::get_health))
        .route("/api/ocr", post(scan_api::run_ocr))
        .route("/api/detect-language", post(scan_api::detect_language))
        .route("/api/translate", post(scan_api::translate))
        .route("/api/parse-address", post(scan_api::parse_address))
        .route("/api/upload", post(upload_api::upload_image))
        .route(
            "/api/address",
            post(address_api::submit_address),
        )
        .route("/api/addresses", get(address_api::list_addresses))
        .route("/api/address/:id", get(address_api::get_address))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Starts the main Axum HTTP server for the gateway.
pub async fn start_server(addr: SocketAddr, app: Router) -> Result<()> {
    info!("Scanpost HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Handler for unmatched routes.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "endpoint not found" })),
    )
}
