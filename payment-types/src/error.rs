//! Error types for the payment charge service.

use card_validator::CardType;

use crate::domain::YearMonth;

/// Why a charge was refused.
///
/// Every variant is terminal: nothing is retried and no partial result is
/// returned. Callers pattern-match the variant; the `Display` text is what
/// ends up in logs and API error bodies.
#[derive(Debug, thiserror::Error)]
pub enum ChargeError {
    /// The runtime kill-switch is on; every authorization is refused.
    #[error("PaymentService Fail Feature Flag Enabled")]
    ServiceDisabled,

    /// The card number is too short to extract the last four digits.
    #[error("Credit card number is too short.")]
    MalformedCard,

    /// The classifier reported a structurally invalid number.
    #[error("Credit card info is invalid.")]
    InvalidCard,

    /// The card scheme is recognized but not accepted.
    #[error(
        "Sorry, we cannot process {card_type} credit cards. Only VISA or MasterCard is accepted."
    )]
    UnsupportedCardScheme { card_type: CardType },

    /// The card's expiration month lies strictly in the past.
    #[error("The credit card (ending {last_four}) expired on {expired}.")]
    CardExpired {
        last_four: String,
        expired: YearMonth,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_scheme_names_the_scheme() {
        let err = ChargeError::UnsupportedCardScheme {
            card_type: CardType::Amex,
        };
        let message = err.to_string();
        assert!(message.contains("amex"));
        assert!(message.contains("Only VISA or MasterCard is accepted."));
    }

    #[test]
    fn test_card_expired_names_month_and_last_four() {
        let err = ChargeError::CardExpired {
            last_four: "0454".to_string(),
            expired: YearMonth {
                year: 2024,
                month: 5,
            },
        };
        assert_eq!(
            err.to_string(),
            "The credit card (ending 0454) expired on 5/2024."
        );
    }
}
