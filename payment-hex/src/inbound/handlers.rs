//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use opentelemetry::baggage::BaggageExt;
use opentelemetry::global;
use opentelemetry_http::HeaderExtractor;

use payment_types::{
    ChargeError, ChargeRequest, Clock, FeatureFlagSource, RequestContext, TelemetrySink,
};

use crate::ChargeService;

/// Application state shared across handlers.
pub struct AppState<F: FeatureFlagSource, C: Clock, T: TelemetrySink> {
    pub service: ChargeService<F, C, T>,
}

/// Wrapper to implement IntoResponse for ChargeError (orphan rule workaround).
pub struct ApiError(pub ChargeError);

impl From<ChargeError> for ApiError {
    fn from(err: ChargeError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ChargeError::ServiceDisabled => StatusCode::SERVICE_UNAVAILABLE,
            ChargeError::MalformedCard
            | ChargeError::InvalidCard
            | ChargeError::UnsupportedCardScheme { .. }
            | ChargeError::CardExpired { .. } => StatusCode::BAD_REQUEST,
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Authorize a charge.
#[tracing::instrument(skip_all)]
pub async fn charge<F: FeatureFlagSource, C: Clock, T: TelemetrySink>(
    State(state): State<Arc<AppState<F, C, T>>>,
    headers: HeaderMap,
    Json(req): Json<ChargeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let ctx = request_context(&headers);
    let resp = state.service.charge(&ctx, req).await?;
    Ok(Json(resp))
}

/// Builds the explicit per-request context from propagated trace baggage.
fn request_context(headers: &HeaderMap) -> RequestContext {
    let remote = global::get_text_map_propagator(|propagator| {
        propagator.extract(&HeaderExtractor(headers))
    });
    RequestContext::from_baggage(
        remote
            .baggage()
            .iter()
            .map(|(key, (value, _))| (key.as_str().to_string(), value.as_str().to_string())),
    )
}
