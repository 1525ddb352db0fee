//! Script-based language detection.
//!
//! Looks for the first Unicode block with at least one matching character,
//! checked in a fixed order. Devanagari is shared between Hindi and Marathi;
//! first match wins, so Devanagari text reports Hindi.

use scanpost_core::Language;

/// Unicode block ranges checked in order.
const SCRIPT_RANGES: &[(char, char, Language)] = &[
    ('\u{0900}', '\u{097F}', Language::Hindi), // Devanagari
    ('\u{0C00}', '\u{0C7F}', Language::Telugu),
    ('\u{0A80}', '\u{0AFF}', Language::Gujarati),
    ('\u{0980}', '\u{09FF}', Language::Bengali),
    ('\u{0B80}', '\u{0BFF}', Language::Tamil),
    ('\u{0C80}', '\u{0CFF}', Language::Kannada),
];

/// Detect the source language of a block of text by script.
///
/// Falls back to English when no known block matches.
pub fn detect_language(text: &str) -> Language {
    for &(lo, hi, lang) in SCRIPT_RANGES {
        if text.chars().any(|c| c >= lo && c <= hi) {
            return lang;
        }
    }
    Language::English
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_english() {
        assert_eq!(detect_language("12 MG Road, Bengaluru"), Language::English);
    }

    #[test]
    fn devanagari_reports_hindi() {
        assert_eq!(detect_language("अशोक नगर"), Language::Hindi);
    }

    #[test]
    fn telugu_block() {
        assert_eq!(detect_language("హైదరాబాద్"), Language::Telugu);
    }

    #[test]
    fn tamil_block() {
        assert_eq!(detect_language("சென்னை"), Language::Tamil);
    }

    #[test]
    fn bengali_block() {
        assert_eq!(detect_language("কলকাতা"), Language::Bengali);
    }

    #[test]
    fn gujarati_block() {
        assert_eq!(detect_language("અમદાવાદ"), Language::Gujarati);
    }

    #[test]
    fn kannada_block() {
        assert_eq!(detect_language("ಬೆಂಗಳೂರು"), Language::Kannada);
    }

    #[test]
    fn mixed_text_reports_first_matching_block() {
        // Latin plus Devanagari: the Latin part never matches a block.
        assert_eq!(detect_language("C/O राम कुमार"), Language::Hindi);
    }

    #[test]
    fn empty_text_is_english() {
        assert_eq!(detect_language(""), Language::English);
    }
}
