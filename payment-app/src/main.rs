//! # Payment Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize OpenTelemetry tracing and metrics
//! - Build the feature flag source
//! - Create the charge service
//! - Start the HTTP server

mod config;
mod telemetry;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payment_flags::build_flag_source;
use payment_hex::{ChargeService, inbound::HttpServer};
use payment_types::SystemClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize OpenTelemetry tracing and metrics
    let (otel_tracer, otel_provider) = telemetry::init_tracer();
    let meter_provider = telemetry::init_meter();
    let otel_layer = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payment_app=debug,payment_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(otel_layer)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting payment server on port {}", config.port);
    match &config.flagd_url {
        Some(url) => tracing::info!("Resolving feature flags via flagd at {}", url),
        None => tracing::info!("No FLAGD_URL configured, feature flags use defaults"),
    }

    // Build the flag source and the charge service
    let flags = build_flag_source(config.flagd_url.as_deref());
    let service = ChargeService::new(flags, SystemClock, telemetry::OtelTelemetry::new());

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces and metrics are flushed before exit
    let _ = otel_provider.shutdown();
    let _ = meter_provider.shutdown();
    Ok(())
}
