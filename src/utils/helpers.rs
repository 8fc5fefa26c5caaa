//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Fallback used when no usable name has been collected yet
pub const FALLBACK_FRIENDLY_NAME: &str = "friend";

/// Derive a friendly first name from a raw full name.
///
/// Takes the first whitespace-delimited token; an empty or all-whitespace
/// input falls back to [`FALLBACK_FRIENDLY_NAME`].
pub fn friendly_name(raw_name: &str) -> String {
    raw_name
        .split_whitespace()
        .next()
        .filter(|first| !first.is_empty())
        .unwrap_or(FALLBACK_FRIENDLY_NAME)
        .to_string()
}

/// Validate email format (basic validation)
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}

/// Validate phone number format (basic validation)
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')
        && phone.len() >= 10
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_name_takes_first_token() {
        assert_eq!(friendly_name("Jane Doe"), "Jane");
        assert_eq!(friendly_name("  Jane   Doe  "), "Jane");
        assert_eq!(friendly_name("Jane"), "Jane");
    }

    #[test]
    fn test_friendly_name_fallback() {
        assert_eq!(friendly_name(""), FALLBACK_FRIENDLY_NAME);
        assert_eq!(friendly_name("   "), FALLBACK_FRIENDLY_NAME);
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("jane@example.com"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("a@b.c"));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+1 555-123-4567"));
        assert!(!is_valid_phone("555"));
        assert!(!is_valid_phone("call me maybe"));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a   b  c "), "a b c");
    }
}
