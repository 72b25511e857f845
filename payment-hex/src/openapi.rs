//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payment_types::domain::{CreditCard, Money, TransactionId};
use payment_types::dto::{ChargeRequest, ChargeResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Authorize a charge
#[utoipa::path(
    post,
    path = "/api/charge",
    tag = "charge",
    request_body = ChargeRequest,
    responses(
        (status = 200, description = "Charge authorized", body = ChargeResponse),
        (status = 400, description = "Card rejected (malformed, invalid, unsupported scheme, or expired)"),
        (status = 503, description = "Payment service disabled by kill switch")
    )
)]
async fn charge() {}

/// OpenAPI documentation for the Payment API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payment Charge API",
        version = "1.0.0",
        description = "Synthetic payment authorization gate: validates a credit card and amount, returns a transaction id on success. No money moves and nothing is persisted.",
        license(name = "MIT"),
    ),
    paths(health, charge),
    components(
        schemas(
            ChargeRequest,
            ChargeResponse,
            CreditCard,
            Money,
            TransactionId,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "charge", description = "Charge authorization"),
    )
)]
pub struct ApiDoc;
