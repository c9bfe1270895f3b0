//! Display Status derivation
//!
//! DMS reports states as concatenated words (`inTransit`, `OutForDelivery`).
//! The VMS shows them as a sentence-cased label (`In transit`,
//! `Out for delivery`).

use crate::error::{Result, SyncError};
use regex::Regex;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // A leading lowercase run, then every capitalised word.
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]+|[A-Z][a-z]*").expect("static pattern"))
}

/// Convert a raw consignment state into its human-readable label
///
/// Characters outside the word pattern (digits, symbols, separators) are
/// dropped. Fails with [`SyncError::InvalidState`] when no word is found.
pub fn display_status(state: &str) -> Result<String> {
    let words: Vec<String> = word_pattern()
        .find_iter(state)
        .map(|m| m.as_str().to_lowercase())
        .collect();

    if words.is_empty() {
        return Err(SyncError::InvalidState(state.to_string()));
    }

    let readable = words.join(" ");
    let mut chars = readable.chars();
    Ok(match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => readable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_state() {
        assert_eq!(display_status("inTransit").unwrap(), "In transit");
    }

    #[test]
    fn test_single_word_state() {
        assert_eq!(display_status("delivered").unwrap(), "Delivered");
    }

    #[test]
    fn test_pascal_case_state() {
        assert_eq!(
            display_status("OutForDelivery").unwrap(),
            "Out for delivery"
        );
    }

    #[test]
    fn test_consecutive_capitals_split_per_letter() {
        // Every uppercase letter opens a new word.
        assert_eq!(display_status("sentToDHL").unwrap(), "Sent to d h l");
    }

    #[test]
    fn test_symbols_are_ignored() {
        assert_eq!(display_status("on_hold").unwrap(), "On");
        assert_eq!(display_status("failed-Attempt").unwrap(), "Failed attempt");
    }

    #[test]
    fn test_only_first_character_is_uppercase() {
        let label = display_status("awaitingCustomerCollection").unwrap();
        assert_eq!(label, "Awaiting customer collection");
        assert!(label.chars().skip(1).all(|c| !c.is_uppercase()));
    }

    #[test]
    fn test_empty_state_is_invalid() {
        let err = display_status("").unwrap_err();
        assert!(matches!(err, SyncError::InvalidState(_)));
    }

    #[test]
    fn test_symbol_only_state_is_invalid() {
        assert!(matches!(
            display_status("_-123!").unwrap_err(),
            SyncError::InvalidState(s) if s == "_-123!"
        ));
    }
}
