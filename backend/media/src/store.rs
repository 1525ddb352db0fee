//! Disk storage for uploaded label photos.
//!
//! Files land in a flat uploads directory under generated UUID names so an
//! attacker-controlled original filename never touches the filesystem.

use std::path::{Path, PathBuf};

use bytes::Bytes;
use scanpost_core::ScanError;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::mime_detect::{detect_mime_type, extension_for, is_allowed_upload};

/// Metadata for a stored upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUpload {
    /// Generated filename inside the uploads directory.
    pub file_name: String,
    /// Path relative to the process working directory.
    pub path: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Writes validated uploads to disk.
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Validate and persist one uploaded file.
    ///
    /// The MIME type is taken from the declared content type when present,
    /// otherwise sniffed from the original filename's extension.
    pub async fn save(
        &self,
        original_name: &str,
        declared_mime: Option<&str>,
        data: Bytes,
    ) -> Result<StoredUpload, ScanError> {
        if data.len() > self.max_bytes {
            return Err(ScanError::UploadTooLarge {
                limit: self.max_bytes,
            });
        }

        let mime = match declared_mime {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => detect_mime_type(Path::new(original_name)).to_string(),
        };
        if !is_allowed_upload(&mime) {
            return Err(ScanError::UnsupportedMediaType(mime));
        }

        let ext = extension_for(&mime).unwrap_or("bin");
        let file_name = format!("{}.{ext}", Uuid::new_v4());

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, &data).await?;

        info!(file = %file_name, bytes = data.len(), "stored upload");
        Ok(StoredUpload {
            file_name,
            path: path.to_string_lossy().into_owned(),
            mime_type: mime,
            size_bytes: data.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn saves_allowed_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path(), 1024);
        let stored = store
            .save("label.jpg", Some("image/jpeg"), Bytes::from_static(b"jpegdata"))
            .await
            .unwrap();
        assert!(stored.file_name.ends_with(".jpg"));
        assert_eq!(stored.size_bytes, 8);
        let on_disk = std::fs::read(dir.path().join(&stored.file_name)).unwrap();
        assert_eq!(on_disk, b"jpegdata");
    }

    #[tokio::test]
    async fn falls_back_to_extension_sniffing() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path(), 1024);
        let stored = store
            .save("photo.png", None, Bytes::from_static(b"png"))
            .await
            .unwrap();
        assert_eq!(stored.mime_type, "image/png");
    }

    #[tokio::test]
    async fn rejects_disallowed_type() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path(), 1024);
        let err = store
            .save("notes.pdf", Some("application/pdf"), Bytes::from_static(b"%PDF"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("unsupported media type"));
    }

    #[tokio::test]
    async fn rejects_oversize_upload() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path(), 4);
        let err = store
            .save("label.jpg", Some("image/jpeg"), Bytes::from_static(b"too big"))
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::UploadTooLarge { .. }));
    }
}
