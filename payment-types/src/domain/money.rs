//! Monetary amount as carried on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A monetary amount split into whole units and nanos, with an ISO 4217
/// currency code.
///
/// The charge path passes the amount through untouched - no arithmetic, no
/// conversion. `nanos` counts billionths of a unit and stays in
/// `0..=999_999_999`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Whole currency units
    #[schema(example = 43)]
    pub units: i64,
    /// Billionths of a unit
    #[schema(example = 950000000)]
    pub nanos: i32,
    /// ISO 4217 currency code
    #[schema(example = "USD")]
    pub currency_code: String,
}

impl Money {
    /// Creates a new amount.
    pub fn new(units: i64, nanos: i32, currency_code: impl Into<String>) -> Self {
        Self {
            units,
            nanos,
            currency_code: currency_code.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Two decimal places is enough for display; nanos keep full precision.
        let cents = self.nanos / 10_000_000;
        write!(f, "{}.{:02} {}", self.units, cents.abs(), self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        let money = Money::new(43, 950_000_000, "USD");
        assert_eq!(format!("{}", money), "43.95 USD");
    }

    #[test]
    fn test_money_serializes_camel_case() {
        let money = Money::new(10, 0, "EUR");
        let json = serde_json::to_value(&money).unwrap();
        assert_eq!(json["units"], 10);
        assert_eq!(json["nanos"], 0);
        assert_eq!(json["currencyCode"], "EUR");
    }
}
