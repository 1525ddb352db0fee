//! `scanpost-scan` — the scanning pipeline stages.
//!
//! An uploaded label photo flows through: OCR ([`ocr`]) → script detection
//! ([`script`]) → optional translation ([`translate`]) → heuristic field
//! parsing ([`parse`]). Each stage is usable on its own; the gateway exposes
//! one endpoint per stage.

pub mod ocr;
pub mod parse;
pub mod script;
pub mod translate;

pub use ocr::{decode_image_payload, FixtureEngine, OcrEngine, TesseractEngine};
pub use parse::parse_address;
pub use script::detect_language;
pub use translate::{HttpTranslator, PassthroughTranslator, Translator};
