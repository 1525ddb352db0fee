//! Heuristic address field parser.
//!
//! Position and pattern rules tuned for hand-addressed postal labels:
//! line 1 is the recipient, lines 2 and 3 the street address, the first
//! 6-digit run anywhere is the PIN code, and the first isolated 10-digit run
//! is a phone number. The PIN rule deliberately has no word boundary — a PIN
//! written flush against other digits should still be picked up, which also
//! means a phone number appearing before the PIN can shadow it. The reviewer
//! corrects such cases in the form.

use once_cell::sync::Lazy;
use regex::Regex;
use scanpost_core::ParsedAddress;

static POSTAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{6}").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10}\b").unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}").unwrap()
});

/// Split a block of OCR text into address fields.
pub fn parse_address(text: &str) -> ParsedAddress {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let first = |re: &Regex| re.find(text).map(|m| m.as_str().to_string());

    ParsedAddress {
        full_name: lines.first().map(|l| l.to_string()),
        address_line1: lines.get(1).map(|l| l.to_string()),
        address_line2: lines.get(2).map(|l| l.to_string()),
        postal_code: first(&POSTAL_RE),
        phone: first(&PHONE_RE),
        email: first(&EMAIL_RE),
        raw_text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "Asha Verma\n12 MG Road\nIndiranagar\nBengaluru 560038\nPh: 9876543210";

    #[test]
    fn lines_map_to_name_and_address() {
        let parsed = parse_address(LABEL);
        assert_eq!(parsed.full_name.as_deref(), Some("Asha Verma"));
        assert_eq!(parsed.address_line1.as_deref(), Some("12 MG Road"));
        assert_eq!(parsed.address_line2.as_deref(), Some("Indiranagar"));
    }

    #[test]
    fn extracts_pin_and_phone() {
        let parsed = parse_address(LABEL);
        assert_eq!(parsed.postal_code.as_deref(), Some("560038"));
        assert_eq!(parsed.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let parsed = parse_address("Asha Verma\n\n  \n12 MG Road\n");
        assert_eq!(parsed.address_line1.as_deref(), Some("12 MG Road"));
        assert_eq!(parsed.address_line2, None);
    }

    #[test]
    fn phone_before_pin_shadows_it() {
        // No boundary on the PIN pattern: the first six digits of the phone
        // number win when the phone is written first.
        let parsed = parse_address("Asha Verma\n9876543210\nBengaluru 560038");
        assert_eq!(parsed.postal_code.as_deref(), Some("987654"));
        assert_eq!(parsed.phone.as_deref(), Some("9876543210"));
    }

    #[test]
    fn eleven_digit_run_is_not_a_phone() {
        let parsed = parse_address("consignment 98765432109");
        assert_eq!(parsed.phone, None);
    }

    #[test]
    fn extracts_email() {
        let parsed = parse_address("Asha Verma\nasha.verma@example.in");
        assert_eq!(parsed.email.as_deref(), Some("asha.verma@example.in"));
    }

    #[test]
    fn empty_text_yields_empty_fields() {
        let parsed = parse_address("");
        assert_eq!(parsed, ParsedAddress { raw_text: String::new(), ..Default::default() });
    }

    #[test]
    fn raw_text_is_preserved() {
        let parsed = parse_address(LABEL);
        assert_eq!(parsed.raw_text, LABEL);
    }
}
