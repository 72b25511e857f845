//! Feature flag port.

/// Runtime boolean flag lookups.
///
/// Implementations own their initialization lifecycle: readiness is
/// established once per process and awaited defensively on every call.
/// Lookups never fail - a provider that cannot answer returns `default`.
#[async_trait::async_trait]
pub trait FeatureFlagSource: Send + Sync + 'static {
    /// Resolves a boolean flag, falling back to `default` when the flag is
    /// unknown or the provider is unreachable.
    async fn get_boolean_flag(&self, flag: &str, default: bool) -> bool;
}
