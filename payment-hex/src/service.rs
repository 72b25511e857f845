//! Charge Authorization Service
//!
//! Runs the validation-and-decision sequence for a single charge through
//! the flag, clock and telemetry ports. Contains NO transport logic - pure
//! business orchestration.

use card_validator::CardType;

use payment_types::{
    AttributeValue, ChargeError, ChargeRequest, ChargeResponse, ChargeSpan, Clock,
    FeatureFlagSource, RequestContext, TelemetrySink, TransactionId,
};

/// Kill-switch flag: when true, every authorization is refused.
pub const PAYMENT_FAILURE_FLAG: &str = "paymentServiceFailure";

/// Baggage entry marking load-generator traffic. Such transactions are
/// authorized normally but recorded as not charged.
pub const SYNTHETIC_REQUEST_BAGGAGE_KEY: &str = "synthetic_request";

/// Application service for charge authorization.
///
/// Generic over its collaborator ports - the adapters are injected at
/// compile time. This enables:
/// - Swapping the flag provider or telemetry backend without code changes
/// - Testing with fixed flags, a manual clock and a recording sink
/// - Compile-time checks for port implementation
///
/// Holds no mutable state: every invocation is independent, so a single
/// instance is safe to share across arbitrary concurrency.
pub struct ChargeService<F, C, T> {
    flags: F,
    clock: C,
    telemetry: T,
}

impl<F, C, T> ChargeService<F, C, T>
where
    F: FeatureFlagSource,
    C: Clock,
    T: TelemetrySink,
{
    /// Creates a new charge service with the given collaborators.
    pub fn new(flags: F, clock: C, telemetry: T) -> Self {
        Self {
            flags,
            clock,
            telemetry,
        }
    }

    /// Authorizes a single charge.
    ///
    /// The checks run in a fixed order and stop at the first failure; every
    /// failure is logged at error level before being returned. `ctx` carries
    /// the trace baggage the transport extracted for this request.
    pub async fn charge(
        &self,
        ctx: &RequestContext,
        request: ChargeRequest,
    ) -> Result<ChargeResponse, ChargeError> {
        let mut span = self.telemetry.start_span("charge");

        // The kill switch is consulted before any card data is touched.
        if self.flags.get_boolean_flag(PAYMENT_FAILURE_FLAG, false).await {
            let err = ChargeError::ServiceDisabled;
            tracing::error!("{err}");
            return Err(err);
        }

        let card = &request.credit_card;
        let last_four = match card.last_four_digits() {
            Ok(last_four) => last_four,
            Err(err) => {
                tracing::error!("{err}");
                return Err(err);
            }
        };

        // The transaction id is minted before any validation verdict exists.
        let transaction_id = TransactionId::new();

        let details = card_validator::card_details(&card.number);

        // Recorded on every path that reaches classification, so failed
        // transactions stay diagnosable.
        span.set_attribute(
            "app.payment.card_type",
            AttributeValue::from(details.card_type.as_str()),
        );
        span.set_attribute("app.payment.card_valid", AttributeValue::from(details.valid));

        if !details.valid {
            let err = ChargeError::InvalidCard;
            tracing::error!("{err}");
            return Err(err);
        }

        if !matches!(details.card_type, CardType::Visa | CardType::Mastercard) {
            let err = ChargeError::UnsupportedCardScheme {
                card_type: details.card_type,
            };
            tracing::error!("{err}");
            return Err(err);
        }

        // Strict comparison: a card expiring this month is still accepted.
        let expiration = card.expiration();
        if self.clock.year_month().linearized() > expiration.linearized() {
            let err = ChargeError::CardExpired {
                last_four: last_four.to_string(),
                expired: expiration,
            };
            tracing::error!("{err}");
            return Err(err);
        }

        // Load-generator traffic carries synthetic_request=true in baggage
        // and is recorded as not charged.
        let synthetic = ctx.baggage_entry(SYNTHETIC_REQUEST_BAGGAGE_KEY) == Some("true");
        span.set_attribute("app.payment.charged", AttributeValue::from(!synthetic));

        span.end();

        let amount = &request.amount;
        tracing::info!(
            transaction_id = %transaction_id,
            card_type = %details.card_type,
            last_four_digits = last_four,
            amount.units = amount.units,
            amount.nanos = amount.nanos,
            amount.currency_code = %amount.currency_code,
            "Transaction complete."
        );
        self.telemetry.add_transactions(1, &amount.currency_code);

        Ok(ChargeResponse { transaction_id })
    }
}
