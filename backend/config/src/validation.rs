//! Deep validation of a loaded config.
//!
//! Errors make the config unusable; warnings are logged and tolerated.

use crate::schema::{OcrEngineKind, ScanpostConfig};

/// A single validation finding, located by a dotted config path.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

/// The outcome of validating a config.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }
}

/// Validate a config, collecting every issue rather than stopping at the first.
pub fn validate(config: &ScanpostConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.server.port == 0 {
        report.error("server.port", "port must be non-zero");
    }
    if config.server.bind_address.trim().is_empty() {
        report.error("server.bindAddress", "bind address must not be empty");
    }

    if config.rate_limit.max_requests == 0 {
        report.error("rateLimit.maxRequests", "must allow at least one request");
    }
    if config.rate_limit.window_secs == 0 {
        report.error("rateLimit.windowSecs", "window must be non-zero");
    }

    if config.upload.dir.trim().is_empty() {
        report.error("upload.dir", "upload directory must not be empty");
    }
    if config.upload.max_bytes == 0 {
        report.error("upload.maxBytes", "upload size limit must be non-zero");
    }

    if config.ocr.engine == OcrEngineKind::Tesseract && config.ocr.tesseract_bin.trim().is_empty() {
        report.error("ocr.tesseractBin", "tesseract engine selected but binary path is empty");
    }
    if config.ocr.engine == OcrEngineKind::Fixture && config.ocr.fixture_text.trim().is_empty() {
        report.warn("ocr.fixtureText", "fixture engine will return empty text");
    }
    if config.ocr.languages.trim().is_empty() {
        report.warn("ocr.languages", "no OCR languages set; tesseract will default to eng");
    }

    if let Some(endpoint) = &config.translate.endpoint {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            report.error("translate.endpoint", "endpoint must be an http(s) URL");
        }
    }

    if !config.cors.allowed_origin.starts_with("http://")
        && !config.cors.allowed_origin.starts_with("https://")
    {
        report.warn("cors.allowedOrigin", "allowed origin is not an http(s) URL");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let report = validate(&ScanpostConfig::default());
        assert!(report.is_valid(), "errors: {:?}", report.errors);
    }

    #[test]
    fn zero_port_is_an_error() {
        let mut c = ScanpostConfig::default();
        c.server.port = 0;
        let report = validate(&c);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|i| i.path == "server.port"));
    }

    #[test]
    fn bad_translate_endpoint_is_an_error() {
        let mut c = ScanpostConfig::default();
        c.translate.endpoint = Some("ftp://translate.example".into());
        assert!(!validate(&c).is_valid());
    }

    #[test]
    fn empty_fixture_text_is_only_a_warning() {
        let mut c = ScanpostConfig::default();
        c.ocr.fixture_text = String::new();
        let report = validate(&c);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
    }
}
