//! `scanpost-config` — runtime configuration for the Scanpost backend.
//!
//! Provides:
//! - Typed config schema (server, CORS, rate limits, uploads, OCR, translation, logging)
//! - Loading from `SCANPOST_*` environment variables with defaults
//! - Deep validation with a warnings/errors report

pub mod schema;
pub mod validation;

pub use schema::{
    CorsConfig, LoggingConfig, OcrConfig, OcrEngineKind, RateLimitConfig, ScanpostConfig,
    ServerConfig, TranslateConfig, UploadConfig,
};
pub use validation::{validate, ValidationIssue, ValidationReport};
