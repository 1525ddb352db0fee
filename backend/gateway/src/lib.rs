//! Scanpost Gateway HTTP API Server
//!
//! Exposes the scanning pipeline (OCR, language detection, translation,
//! parsing), uploads, and the address record store as a flat JSON API.

pub mod address_api;
pub mod error;
pub mod health_api;
pub mod rate_limit;
pub mod scan_api;
pub mod server;
pub mod upload_api;

pub use error::{ApiError, ApiJson};
pub use rate_limit::RateLimiter;
pub use server::{build_router, start_server, GatewayState};
