//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod clock;
mod flags;
mod telemetry;

pub use clock::{Clock, SystemClock};
pub use flags::FeatureFlagSource;
pub use telemetry::{AttributeValue, ChargeSpan, TelemetrySink};
