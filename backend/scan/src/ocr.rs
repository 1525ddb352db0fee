//! Optical Character Recognition (OCR)
//!
//! Extracts text from label photos. Two engines: a bridge to the `tesseract`
//! CLI, and a fixture engine returning configured sample text for demos and
//! tests.

use async_trait::async_trait;
use base64::Engine as _;
use scanpost_core::ScanError;
use tracing::{debug, info};

/// An OCR backend able to read text out of an image.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Engine name, reported in API responses and logs.
    fn name(&self) -> &str;

    /// Extract all discernible text from the given image bytes.
    async fn extract_text(&self, image: &[u8]) -> Result<String, ScanError>;
}

/// Decode a base64 image payload as sent by the scanner UI.
///
/// Accepts both bare base64 and `data:image/...;base64,` URLs.
pub fn decode_image_payload(payload: &str) -> Result<Vec<u8>, ScanError> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidImage("empty image payload".into()));
    }

    let encoded = match trimmed.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => trimmed,
    };

    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| ScanError::InvalidImage(format!("invalid base64: {e}")))
}

/// Shells out to the `tesseract` binary.
pub struct TesseractEngine {
    binary: String,
    /// Language codes passed via `-l`, e.g. "eng+hin".
    languages: String,
}

impl TesseractEngine {
    pub fn new(binary: impl Into<String>, languages: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            languages: languages.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    async fn extract_text(&self, image: &[u8]) -> Result<String, ScanError> {
        // tesseract reads from a file, so stage the bytes in a temp path.
        let tmp = tempfile::NamedTempFile::new()?;
        tokio::fs::write(tmp.path(), image).await?;

        info!(bytes = image.len(), "running tesseract on image");
        let output = tokio::process::Command::new(&self.binary)
            .arg(tmp.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.languages)
            .output()
            .await
            .map_err(|e| ScanError::OcrFailed {
                engine: "tesseract".into(),
                message: format!("failed to spawn {}: {e}", self.binary),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::OcrFailed {
                engine: "tesseract".into(),
                message: stderr.trim().to_string(),
            });
        }

        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(chars = text.len(), "tesseract finished");
        Ok(text)
    }
}

/// Returns configured sample text regardless of input.
pub struct FixtureEngine {
    text: String,
}

impl FixtureEngine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl OcrEngine for FixtureEngine {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn extract_text(&self, _image: &[u8]) -> Result<String, ScanError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_bare_base64() {
        let bytes = decode_image_payload("aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn strips_data_url_prefix() {
        let bytes = decode_image_payload("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(decode_image_payload("   ").is_err());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(decode_image_payload("not base64!!").is_err());
    }

    #[tokio::test]
    async fn fixture_engine_ignores_input() {
        let engine = FixtureEngine::new("Asha Verma\n12 MG Road");
        let text = engine.extract_text(b"whatever").await.unwrap();
        assert_eq!(text, "Asha Verma\n12 MG Road");
        assert_eq!(engine.name(), "fixture");
    }
}
