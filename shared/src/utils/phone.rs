//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// National mobile number: 11 digits, "01" followed by an operator digit 3-9
static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^01[3-9]\d{8}$").expect("mobile number pattern is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is a valid national mobile number.
///
/// Spaces and dashes are ignored and a leading `+88` country code is accepted.
pub fn is_valid_mobile(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    let local = normalized.strip_prefix("+88").unwrap_or(&normalized);
    MOBILE_REGEX.is_match(local)
}

/// Mask a phone number for logging (e.g., 017****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("017-1234-5678"), "01712345678");
        assert_eq!(normalize_phone_number("+88 017 1234 5678"), "+8801712345678");
    }

    #[test]
    fn test_valid_mobile_numbers() {
        assert!(is_valid_mobile("01712345678"));
        assert!(is_valid_mobile("01312345678"));
        assert!(is_valid_mobile("01912345678"));
        assert!(is_valid_mobile("017-1234-5678"));
        assert!(is_valid_mobile("+8801712345678"));
    }

    #[test]
    fn test_invalid_mobile_numbers() {
        assert!(!is_valid_mobile("01212345678"));
        assert!(!is_valid_mobile("0171234567"));
        assert!(!is_valid_mobile("017123456789"));
        assert!(!is_valid_mobile("11712345678"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("01712345678"), "017****5678");
        assert_eq!(mask_phone_number("123"), "****");
    }
}
