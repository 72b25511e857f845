//! # Payment Flags
//!
//! Concrete feature-flag implementations (adapters) for the payment charge
//! service. This crate provides the backends that implement the
//! `FeatureFlagSource` port.

use async_trait::async_trait;
use payment_types::FeatureFlagSource;

pub mod fixed;
pub mod flagd;

pub use fixed::FixedFlags;
pub use flagd::FlagdProvider;

/// Unified flag source wrapper: flagd-backed when an endpoint is
/// configured, a fixed table otherwise.
pub enum FlagSource {
    Flagd(FlagdProvider),
    Fixed(FixedFlags),
}

/// Build a flag source from an optional flagd endpoint URL.
///
/// # Examples
///
/// ```ignore
/// // Resolve against a flagd sidecar
/// let flags = build_flag_source(Some("http://localhost:8013"));
///
/// // No provider configured: every lookup returns its default
/// let flags = build_flag_source(None);
/// ```
pub fn build_flag_source(flagd_url: Option<&str>) -> FlagSource {
    match flagd_url {
        Some(url) => FlagSource::Flagd(FlagdProvider::new(url)),
        None => FlagSource::Fixed(FixedFlags::new()),
    }
}

#[async_trait]
impl FeatureFlagSource for FlagSource {
    async fn get_boolean_flag(&self, flag: &str, default: bool) -> bool {
        match self {
            FlagSource::Flagd(provider) => provider.get_boolean_flag(flag, default).await,
            FlagSource::Fixed(table) => table.get_boolean_flag(flag, default).await,
        }
    }
}
