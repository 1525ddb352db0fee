//! Translation providers.
//!
//! Non-English scans can be translated to the clerk's working language before
//! parsing. The HTTP provider bridges to an external service; the passthrough
//! provider echoes its input and is used whenever no endpoint is configured.

use async_trait::async_trait;
use scanpost_core::{Language, ScanError};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A translation backend.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Provider name, reported in logs.
    fn name(&self) -> &str;

    /// Translate `text` from `source` into the `target` language code.
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: &str,
    ) -> Result<String, ScanError>;
}

/// Translate only when the source is not already English.
pub async fn translate_if_needed(
    translator: &dyn Translator,
    text: &str,
    source: Language,
    target: &str,
) -> Result<String, ScanError> {
    if source == Language::English {
        return Ok(text.to_string());
    }
    translator.translate(text, source, target).await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    text: &'a str,
    source_language: String,
    target_language: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

/// Bridges to an external translation endpoint speaking flat JSON.
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTranslator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    fn name(&self) -> &str {
        "http"
    }

    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: &str,
    ) -> Result<String, ScanError> {
        info!(source = %source, target, "requesting translation");
        let request = TranslateRequest {
            text,
            source_language: source.to_string(),
            target_language: target,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ScanError::TranslationFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScanError::TranslationFailed(format!(
                "provider returned {}",
                response.status()
            )));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| ScanError::TranslationFailed(format!("bad provider response: {e}")))?;

        Ok(body.translated_text)
    }
}

/// Echoes the input text. Stands in when no translation endpoint is set.
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    fn name(&self) -> &str {
        "passthrough"
    }

    async fn translate(
        &self,
        text: &str,
        _source: Language,
        _target: &str,
    ) -> Result<String, ScanError> {
        Ok(text.to_string())
    }
}
