use thiserror::Error;

/// Top-level error type for the Scanpost runtime.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("address not found: {0}")]
    AddressNotFound(u64),

    #[error("invalid image payload: {0}")]
    InvalidImage(String),

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("OCR engine error ({engine}): {message}")]
    OcrFailed { engine: String, message: String },

    #[error("translation failed: {0}")]
    TranslationFailed(String),

    #[error("upload too large (limit {limit} bytes)")]
    UploadTooLarge { limit: usize },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
