//! flagd evaluation adapter.
//!
//! Resolves boolean flags against flagd's Connect-JSON evaluation endpoint
//! (`POST {base}/flagd.evaluation.v1.Service/ResolveBoolean`). Resolution
//! never fails the caller: transport or decode errors fall back to the
//! requested default.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use payment_types::FeatureFlagSource;

/// Client for a flagd evaluation endpoint.
pub struct FlagdProvider {
    base_url: String,
    client: OnceCell<reqwest::Client>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolveBooleanRequest<'a> {
    flag_key: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResolveBooleanResponse {
    value: bool,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    variant: Option<String>,
}

impl FlagdProvider {
    /// Creates a provider for the given flagd base URL (e.g.
    /// `http://localhost:8013`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: OnceCell::new(),
        }
    }

    /// Provider initialization happens once per process; every call awaits
    /// it before resolving.
    async fn client(&self) -> &reqwest::Client {
        self.client
            .get_or_init(|| async {
                reqwest::Client::builder()
                    .timeout(Duration::from_secs(2))
                    .build()
                    .unwrap_or_default()
            })
            .await
    }

    async fn resolve_boolean(&self, flag: &str) -> Result<ResolveBooleanResponse, reqwest::Error> {
        let url = format!("{}/flagd.evaluation.v1.Service/ResolveBoolean", self.base_url);
        self.client()
            .await
            .post(url)
            .json(&ResolveBooleanRequest { flag_key: flag })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl FeatureFlagSource for FlagdProvider {
    async fn get_boolean_flag(&self, flag: &str, default: bool) -> bool {
        match self.resolve_boolean(flag).await {
            Ok(resolution) => {
                tracing::debug!(
                    flag,
                    value = resolution.value,
                    reason = ?resolution.reason,
                    variant = ?resolution.variant,
                    "resolved feature flag"
                );
                resolution.value
            }
            Err(err) => {
                tracing::warn!(flag, %err, "flag resolution failed, using default");
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_response_decodes() {
        let json = r#"{"value": true, "reason": "TARGETING_MATCH", "variant": "on"}"#;
        let resolution: ResolveBooleanResponse = serde_json::from_str(json).unwrap();
        assert!(resolution.value);
        assert_eq!(resolution.reason.as_deref(), Some("TARGETING_MATCH"));
    }

    #[test]
    fn test_resolution_response_minimal() {
        let resolution: ResolveBooleanResponse =
            serde_json::from_str(r#"{"value": false}"#).unwrap();
        assert!(!resolution.value);
        assert!(resolution.variant.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = FlagdProvider::new("http://localhost:8013/");
        assert_eq!(provider.base_url, "http://localhost:8013");
    }
}
