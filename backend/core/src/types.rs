use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Source language of a scanned address, as detected from its script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
    Gujarati,
    Marathi,
    Bengali,
    Tamil,
    Kannada,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::Gujarati => "Gujarati",
            Language::Marathi => "Marathi",
            Language::Bengali => "Bengali",
            Language::Tamil => "Tamil",
            Language::Kannada => "Kannada",
        };
        write!(f, "{name}")
    }
}

/// A reviewed address as submitted from the correction form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub detected_language: Option<Language>,
}

impl AddressSubmission {
    /// Check that the fields the counter clerk must fill are present.
    ///
    /// Whitespace-only values count as missing.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.full_name.trim().is_empty() {
            return Err(ScanError::MissingField("fullName"));
        }
        if self.address_line1.trim().is_empty() {
            return Err(ScanError::MissingField("addressLine1"));
        }
        if self.postal_code.trim().is_empty() {
            return Err(ScanError::MissingField("postalCode"));
        }
        Ok(())
    }
}

/// A stored address record with its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    /// Sequential process-local identifier, starting at 1.
    pub id: u64,
    pub full_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub detected_language: Option<Language>,
    pub created_at: DateTime<Utc>,
}

impl AddressRecord {
    pub fn from_submission(id: u64, submission: AddressSubmission) -> Self {
        Self {
            id,
            full_name: submission.full_name,
            address_line1: submission.address_line1,
            address_line2: submission.address_line2,
            city: submission.city,
            state: submission.state,
            postal_code: submission.postal_code,
            country: submission.country,
            phone: submission.phone,
            email: submission.email,
            detected_language: submission.detected_language,
            created_at: Utc::now(),
        }
    }
}

/// Fields recovered from a block of OCR text by the heuristic parser.
///
/// Anything the heuristics cannot place is simply absent; the reviewer
/// fills the gaps by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddress {
    pub full_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// The raw text the fields were extracted from.
    pub raw_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_submission() -> AddressSubmission {
        AddressSubmission {
            full_name: "Asha Verma".into(),
            address_line1: "12 MG Road".into(),
            postal_code: "560001".into(),
            ..Default::default()
        }
    }

    #[test]
    fn submission_with_required_fields_validates() {
        assert!(minimal_submission().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut s = minimal_submission();
        s.full_name = "   ".into();
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("fullName"));
    }

    #[test]
    fn missing_postal_code_is_rejected() {
        let mut s = minimal_submission();
        s.postal_code.clear();
        assert!(s.validate().is_err());
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = AddressRecord::from_submission(7, minimal_submission());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["fullName"], "Asha Verma");
        assert_eq!(json["postalCode"], "560001");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn language_display_matches_wire_name() {
        assert_eq!(Language::Hindi.to_string(), "Hindi");
        let json = serde_json::to_string(&Language::Tamil).unwrap();
        assert_eq!(json, "\"Tamil\"");
    }
}
