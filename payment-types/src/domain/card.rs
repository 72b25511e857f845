//! Credit card domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::error::ChargeError;

/// A calendar month, comparable through [`YearMonth::linearized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Maps the month onto a single integer axis (`year*12 + month`) so
    /// expirations compare with plain integer arithmetic.
    pub fn linearized(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Card details as supplied by the caller.
///
/// The number is kept verbatim; only its last four digits may ever reach
/// logs or telemetry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreditCard {
    /// Card number (digits, optionally separated by spaces or hyphens)
    #[schema(example = "4432-8015-6152-0454")]
    pub number: String,
    /// Expiration month, 1-12
    #[schema(example = 1)]
    pub expiration_month: u32,
    /// Expiration year
    #[schema(example = 2030)]
    pub expiration_year: i32,
}

impl CreditCard {
    /// Returns the final four characters of the card number.
    ///
    /// Numbers shorter than four characters cannot identify a card at all
    /// and are rejected as malformed.
    pub fn last_four_digits(&self) -> Result<&str, ChargeError> {
        match self.number.char_indices().rev().nth(3) {
            Some((idx, _)) => Ok(&self.number[idx..]),
            None => Err(ChargeError::MalformedCard),
        }
    }

    /// The expiration as a comparable calendar month.
    pub fn expiration(&self) -> YearMonth {
        YearMonth {
            year: self.expiration_year,
            month: self.expiration_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(number: &str) -> CreditCard {
        CreditCard {
            number: number.to_string(),
            expiration_month: 1,
            expiration_year: 2030,
        }
    }

    #[test]
    fn test_last_four_digits() {
        assert_eq!(card("4111111111111111").last_four_digits().unwrap(), "1111");
        assert_eq!(card("378282246310005").last_four_digits().unwrap(), "0005");
    }

    #[test]
    fn test_last_four_of_exactly_four() {
        assert_eq!(card("1234").last_four_digits().unwrap(), "1234");
    }

    #[test]
    fn test_short_number_is_malformed() {
        assert!(matches!(
            card("411").last_four_digits(),
            Err(ChargeError::MalformedCard)
        ));
        assert!(matches!(
            card("").last_four_digits(),
            Err(ChargeError::MalformedCard)
        ));
    }

    #[test]
    fn test_linearized_month_ordering() {
        let december = YearMonth {
            year: 2023,
            month: 12,
        };
        let january = YearMonth {
            year: 2024,
            month: 1,
        };
        assert!(january.linearized() > december.linearized());
        assert_eq!(january.linearized() - december.linearized(), 1);
    }

    #[test]
    fn test_year_month_display() {
        let expired = YearMonth {
            year: 2024,
            month: 5,
        };
        assert_eq!(expired.to_string(), "5/2024");
    }
}
