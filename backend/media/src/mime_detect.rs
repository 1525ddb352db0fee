//! MIME type detection for uploaded label photos.
//!
//! Used by the upload pipeline to validate and label stored files.

use std::path::Path;

/// Detect MIME type by file extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "webp"         => "image/webp",
        "gif"          => "image/gif",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        _              => "application/octet-stream",
    }
}

/// Whether a MIME type may be stored by the upload endpoint.
///
/// Matches the scanner's accepted camera/photo formats.
pub fn is_allowed_upload(mime: &str) -> bool {
    matches!(mime, "image/jpeg" | "image/png" | "image/webp")
}

/// Canonical extension for an accepted MIME type.
pub fn extension_for(mime: &str) -> Option<&'static str> {
    match mime {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_jpeg() {
        assert_eq!(detect_mime_type(&PathBuf::from("label.jpg")), "image/jpeg");
        assert_eq!(detect_mime_type(&PathBuf::from("label.JPEG")), "image/jpeg");
    }

    #[test]
    fn unknown_extension_fallback() {
        assert_eq!(
            detect_mime_type(&PathBuf::from("file.xyz")),
            "application/octet-stream"
        );
    }

    #[test]
    fn allows_only_photo_formats() {
        assert!(is_allowed_upload("image/jpeg"));
        assert!(is_allowed_upload("image/png"));
        assert!(is_allowed_upload("image/webp"));
        assert!(!is_allowed_upload("image/gif"));
        assert!(!is_allowed_upload("application/pdf"));
    }

    #[test]
    fn extension_round_trip() {
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("image/gif"), None);
    }
}
