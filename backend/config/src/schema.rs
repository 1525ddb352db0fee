//! Scanpost runtime configuration schema.
//!
//! Every value has a default suitable for local development; deployments
//! override via `SCANPOST_*` environment variables.

use serde::{Deserialize, Serialize};

/// Root configuration for the Scanpost backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanpostConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub upload: UploadConfig,
    pub ocr: OcrConfig,
    pub translate: TranslateConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsConfig {
    /// Origin allowed to call the API (the review UI).
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitConfig {
    /// Requests allowed per client IP within one window.
    pub max_requests: u32,
    /// Window length in seconds.
    pub window_secs: u64,
    /// Key clients by `x-forwarded-for`. Enable only behind a reverse proxy
    /// that sets the header; otherwise clients pick their own key.
    pub trust_proxy: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // 100 requests per 15 minutes
        Self {
            max_requests: 100,
            window_secs: 15 * 60,
            trust_proxy: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfig {
    /// Directory uploaded label photos are written to.
    pub dir: String,
    /// Maximum accepted upload size in bytes.
    pub max_bytes: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            dir: "uploads".to_string(),
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Which OCR engine backs `POST /api/ocr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrEngineKind {
    /// Shell out to the `tesseract` CLI.
    Tesseract,
    /// Return configured sample text; used for demos and tests.
    #[default]
    Fixture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrConfig {
    pub engine: OcrEngineKind,
    /// Path or name of the tesseract binary.
    pub tesseract_bin: String,
    /// Language codes passed to tesseract via `-l` (e.g. "eng+hin").
    pub languages: String,
    /// Text returned by the fixture engine.
    pub fixture_text: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            engine: OcrEngineKind::default(),
            tesseract_bin: "tesseract".to_string(),
            languages: "eng".to_string(),
            fixture_text: "Asha Verma\n12 MG Road\nIndiranagar\nBengaluru 560038\n9876543210"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateConfig {
    /// External translation endpoint. When unset, text passes through untranslated.
    pub endpoint: Option<String>,
    /// Target language code requested from the provider.
    pub target_language: String,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            target_language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Default level filter when RUST_LOG is not set.
    pub level: String,
    /// Directory for the rolling NDJSON log file.
    pub dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
        }
    }
}

impl ScanpostConfig {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            server: ServerConfig {
                bind_address: env_or("SCANPOST_BIND", d.server.bind_address),
                port: env_parse("SCANPOST_PORT", d.server.port),
            },
            cors: CorsConfig {
                allowed_origin: env_or("SCANPOST_FRONTEND_URL", d.cors.allowed_origin),
            },
            rate_limit: RateLimitConfig {
                max_requests: env_parse("SCANPOST_RATE_MAX", d.rate_limit.max_requests),
                window_secs: env_parse("SCANPOST_RATE_WINDOW_SECS", d.rate_limit.window_secs),
                trust_proxy: env_parse("SCANPOST_RATE_TRUST_PROXY", d.rate_limit.trust_proxy),
            },
            upload: UploadConfig {
                dir: env_or("SCANPOST_UPLOAD_DIR", d.upload.dir),
                max_bytes: env_parse("SCANPOST_UPLOAD_MAX_BYTES", d.upload.max_bytes),
            },
            ocr: OcrConfig {
                engine: match std::env::var("SCANPOST_OCR_ENGINE").as_deref() {
                    Ok("tesseract") => OcrEngineKind::Tesseract,
                    Ok("fixture") => OcrEngineKind::Fixture,
                    _ => d.ocr.engine,
                },
                tesseract_bin: env_or("SCANPOST_TESSERACT_BIN", d.ocr.tesseract_bin),
                languages: env_or("SCANPOST_OCR_LANGS", d.ocr.languages),
                fixture_text: env_or("SCANPOST_OCR_FIXTURE_TEXT", d.ocr.fixture_text),
            },
            translate: TranslateConfig {
                endpoint: std::env::var("SCANPOST_TRANSLATE_URL").ok(),
                target_language: env_or("SCANPOST_TARGET_LANG", d.translate.target_language),
            },
            logging: LoggingConfig {
                level: env_or("SCANPOST_LOG_LEVEL", d.logging.level),
                dir: env_or("SCANPOST_LOG_DIR", d.logging.dir),
            },
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_service() {
        let c = ScanpostConfig::default();
        assert_eq!(c.server.port, 5000);
        assert_eq!(c.rate_limit.max_requests, 100);
        assert_eq!(c.rate_limit.window_secs, 900);
        assert!(!c.rate_limit.trust_proxy);
        assert_eq!(c.upload.max_bytes, 10 * 1024 * 1024);
        assert_eq!(c.cors.allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn engine_kind_round_trips() {
        let json = serde_json::to_string(&OcrEngineKind::Tesseract).unwrap();
        assert_eq!(json, "\"tesseract\"");
        let back: OcrEngineKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OcrEngineKind::Tesseract);
    }
}
