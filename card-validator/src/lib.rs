//! Card Number Classification
//!
//! Recognizes the payment scheme of a card number from its prefix and
//! length, and checks structural validity with the Luhn checksum. The input
//! is a digit string; spaces and hyphens are tolerated as separators.
//!
//! # Example
//! ```
//! use card_validator::{CardType, card_details};
//!
//! let details = card_details("4111-1111-1111-1111");
//! assert_eq!(details.card_type, CardType::Visa);
//! assert!(details.valid);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Payment scheme of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    /// Prefix/length matched no known scheme.
    Unknown,
}

impl CardType {
    /// Lowercase scheme name, as recorded in telemetry.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Visa => "visa",
            CardType::Mastercard => "mastercard",
            CardType::Amex => "amex",
            CardType::Discover => "discover",
            CardType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDetails {
    pub card_type: CardType,
    /// True when the scheme is known and the Luhn checksum holds.
    pub valid: bool,
}

// Anchored prefix/length patterns per scheme.
static VISA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^4[0-9]{12}(?:[0-9]{3})?$").expect("visa pattern"));
static MASTERCARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^5[1-5][0-9]{14}$").expect("mastercard pattern"));
static AMEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^3[47][0-9]{13}$").expect("amex pattern"));
static DISCOVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^6(?:011|5[0-9]{2})[0-9]{12}$").expect("discover pattern"));

/// Classifies a card number and checks its structural validity.
pub fn card_details(number: &str) -> CardDetails {
    let digits: String = number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    let card_type = classify(&digits);
    let valid = card_type != CardType::Unknown && luhn(&digits);

    CardDetails { card_type, valid }
}

fn classify(digits: &str) -> CardType {
    if VISA.is_match(digits) {
        CardType::Visa
    } else if MASTERCARD.is_match(digits) {
        CardType::Mastercard
    } else if AMEX.is_match(digits) {
        CardType::Amex
    } else if DISCOVER.is_match(digits) {
        CardType::Discover
    } else {
        CardType::Unknown
    }
}

/// Luhn checksum over a digit string. Empty or non-digit input fails.
fn luhn(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;
    for b in digits.bytes().rev() {
        let mut d = (b - b'0') as u32;
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_classification() {
        let details = card_details("4111111111111111");
        assert_eq!(details.card_type, CardType::Visa);
        assert!(details.valid);
    }

    #[test]
    fn test_thirteen_digit_visa() {
        // Visa allows the legacy 13-digit form.
        let details = card_details("4222222222222");
        assert_eq!(details.card_type, CardType::Visa);
        assert!(details.valid);
    }

    #[test]
    fn test_mastercard_classification() {
        let details = card_details("5555555555554444");
        assert_eq!(details.card_type, CardType::Mastercard);
        assert!(details.valid);
    }

    #[test]
    fn test_amex_classification() {
        let details = card_details("378282246310005");
        assert_eq!(details.card_type, CardType::Amex);
        assert!(details.valid);
    }

    #[test]
    fn test_discover_classification() {
        let details = card_details("6011111111111117");
        assert_eq!(details.card_type, CardType::Discover);
        assert!(details.valid);
    }

    #[test]
    fn test_separators_are_ignored() {
        let details = card_details("4111-1111 1111-1111");
        assert_eq!(details.card_type, CardType::Visa);
        assert!(details.valid);
    }

    #[test]
    fn test_bad_checksum_is_invalid() {
        let details = card_details("4111111111111112");
        assert_eq!(details.card_type, CardType::Visa);
        assert!(!details.valid);
    }

    #[test]
    fn test_unknown_prefix() {
        let details = card_details("9999999999999999");
        assert_eq!(details.card_type, CardType::Unknown);
        assert!(!details.valid);
    }

    #[test]
    fn test_garbage_input() {
        for number in ["", "x", "4111-abcd-1111-1111", "41"] {
            let details = card_details(number);
            assert_eq!(details.card_type, CardType::Unknown);
            assert!(!details.valid);
        }
    }

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(CardType::Mastercard.to_string(), "mastercard");
        assert_eq!(CardType::Amex.to_string(), "amex");
    }
}
