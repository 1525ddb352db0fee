//! Log Redaction Layer
//!
//! Scrubs phone numbers and e-mail addresses from strings prior to logging.
//! Address scans carry personal data end to end, so raw OCR text never goes
//! to the log file unredacted.

use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\b\d{10}\b").unwrap()
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap()
});

/// Redacts personal data patterns in a string.
pub fn redact_personal_data(input: &str) -> String {
    let redacted = PHONE_RE.replace_all(input, "[REDACTED_PHONE]");
    EMAIL_RE.replace_all(&redacted, "[REDACTED_EMAIL]").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_phone_and_email() {
        let raw = "Deliver to 9876543210, confirm at asha.verma@example.in";
        let clean = redact_personal_data(raw);
        assert!(!clean.contains("9876543210"));
        assert!(!clean.contains("asha.verma@example.in"));
        assert!(clean.contains("[REDACTED_PHONE]"));
        assert!(clean.contains("[REDACTED_EMAIL]"));
    }

    #[test]
    fn leaves_postal_codes_alone() {
        let raw = "Bengaluru 560038";
        assert_eq!(redact_personal_data(raw), raw);
    }
}
