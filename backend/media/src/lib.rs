//! `scanpost-media` — label photo handling.
//!
//! MIME detection for incoming uploads and disk storage under generated
//! filenames.

pub mod mime_detect;
pub mod store;

pub use mime_detect::{detect_mime_type, extension_for, is_allowed_upload};
pub use store::{StoredUpload, UploadStore};
