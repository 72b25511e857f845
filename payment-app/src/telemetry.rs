//! OpenTelemetry wiring: providers, propagators, and the sink adapter.

use opentelemetry::metrics::Counter;
use opentelemetry::propagation::TextMapCompositePropagator;
use opentelemetry::trace::{Span as _, Tracer as _};
use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::metrics::SdkMeterProvider;
use opentelemetry_sdk::propagation::{BaggagePropagator, TraceContextPropagator};
use opentelemetry_sdk::trace as sdktrace;

use payment_types::{AttributeValue, ChargeSpan, TelemetrySink};

/// Instrumentation scope shared by the tracer and the meter.
const SCOPE: &str = "paymentservice";

pub fn init_tracer() -> (sdktrace::Tracer, sdktrace::SdkTracerProvider) {
    // Baggage must propagate alongside the trace context so synthetic
    // requests can be recognized.
    global::set_text_map_propagator(TextMapCompositePropagator::new(vec![
        Box::new(TraceContextPropagator::new()),
        Box::new(BaggagePropagator::new()),
    ]));

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .expect("failed to create OTLP span exporter");

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    (provider.tracer(SCOPE), provider)
}

pub fn init_meter() -> SdkMeterProvider {
    let exporter = opentelemetry_otlp::MetricExporter::builder()
        .with_tonic()
        .build()
        .expect("failed to create OTLP metric exporter");

    let provider = SdkMeterProvider::builder()
        .with_periodic_exporter(exporter)
        .build();

    global::set_meter_provider(provider.clone());
    provider
}

/// Telemetry sink backed by the global OpenTelemetry tracer and meter.
pub struct OtelTelemetry {
    tracer: global::BoxedTracer,
    transactions: Counter<u64>,
}

impl OtelTelemetry {
    /// Creates the sink; call after the providers are installed.
    pub fn new() -> Self {
        Self {
            tracer: global::tracer(SCOPE),
            transactions: global::meter(SCOPE)
                .u64_counter("app.payment.transactions")
                .build(),
        }
    }
}

impl Default for OtelTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

/// Span handle; ends on drop if not ended explicitly.
pub struct OtelSpan(global::BoxedSpan);

impl ChargeSpan for OtelSpan {
    fn set_attribute(&mut self, key: &'static str, value: AttributeValue) {
        let value = match value {
            AttributeValue::Bool(b) => opentelemetry::Value::Bool(b),
            AttributeValue::String(s) => opentelemetry::Value::from(s),
        };
        self.0.set_attribute(KeyValue::new(key, value));
    }

    fn end(&mut self) {
        self.0.end();
    }
}

impl TelemetrySink for OtelTelemetry {
    type Span = OtelSpan;

    fn start_span(&self, name: &'static str) -> OtelSpan {
        OtelSpan(self.tracer.start(name))
    }

    fn add_transactions(&self, count: u64, currency_code: &str) {
        self.transactions.add(
            count,
            &[KeyValue::new(
                "app.payment.currency",
                currency_code.to_string(),
            )],
        );
    }
}
