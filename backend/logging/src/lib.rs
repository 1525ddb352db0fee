//! Structured logging for the Scanpost backend.
//!
//! Handles subscriber setup (console + rolling NDJSON file) and redaction of
//! personal data before it reaches logs.

pub mod logger;
pub mod redact;

pub use logger::init_logger;
pub use redact::redact_personal_data;
