//! # Payment Hex
//!
//! Application service layer and HTTP adapter for the payment charge
//! service.
//!
//! ## Architecture
//!
//! - `service/` - The charge authorizer (orchestrates the decision sequence)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over its three ports (`FeatureFlagSource`,
//! `Clock`, `TelemetrySink`), allowing different collaborator
//! implementations to be injected.

pub mod inbound;
mod openapi;
pub mod service;


pub use service::{ChargeService, PAYMENT_FAILURE_FLAG, SYNTHETIC_REQUEST_BAGGAGE_KEY};
