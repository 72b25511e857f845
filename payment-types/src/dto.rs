//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CreditCard, Money, TransactionId};

/// Request to authorize a charge against a credit card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChargeRequest {
    /// Card to charge
    pub credit_card: CreditCard,
    /// Amount to charge, passed through untouched
    pub amount: Money,
}

/// Response after a successful authorization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChargeResponse {
    /// Unique transaction identifier
    pub transaction_id: TransactionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_request_wire_shape() {
        let json = serde_json::json!({
            "creditCard": {
                "number": "4432801561520454",
                "expirationMonth": 1,
                "expirationYear": 2030
            },
            "amount": { "units": 43, "nanos": 0, "currencyCode": "USD" }
        });

        let req: ChargeRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.credit_card.expiration_month, 1);
        assert_eq!(req.amount.currency_code, "USD");
    }

    #[test]
    fn test_charge_response_wire_shape() {
        let resp = ChargeResponse {
            transaction_id: TransactionId::new(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("transactionId").is_some());
    }
}
