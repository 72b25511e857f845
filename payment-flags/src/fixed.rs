//! Fixed in-memory flag source.

use std::collections::HashMap;

use async_trait::async_trait;
use payment_types::FeatureFlagSource;

/// Flag source backed by a fixed name-to-value table.
///
/// Used when no flagd endpoint is configured, and as the flag collaborator
/// in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedFlags {
    flags: HashMap<String, bool>,
}

impl FixedFlags {
    /// An empty table: every lookup returns its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins a flag to a value.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }
}

#[async_trait]
impl FeatureFlagSource for FixedFlags {
    async fn get_boolean_flag(&self, flag: &str, default: bool) -> bool {
        self.flags.get(flag).copied().unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_flag_uses_default() {
        let flags = FixedFlags::new();
        assert!(!flags.get_boolean_flag("paymentServiceFailure", false).await);
        assert!(flags.get_boolean_flag("paymentServiceFailure", true).await);
    }

    #[tokio::test]
    async fn test_pinned_flag_wins_over_default() {
        let flags = FixedFlags::new().with_flag("paymentServiceFailure", true);
        assert!(flags.get_boolean_flag("paymentServiceFailure", false).await);
    }
}
