// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::metrics_handler;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Order submissions by outcome
// - Transaction submissions by outcome (including injected failures)
// - Latency of the hand-off call from Order Intake to the Transaction Logger
//
// Each service process owns one registry, scraped via /metrics
// ============================================================================

/// Metrics registry for one service process
pub struct Metrics {
    registry: Registry,

    pub orders_received: IntCounterVec,
    pub transactions_received: IntCounterVec,
    pub downstream_request_duration: HistogramVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_received = IntCounterVec::new(
            Opts::new("orders_received_total", "Total order submissions by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(orders_received.clone()))?;

        let transactions_received = IntCounterVec::new(
            Opts::new("transactions_received_total", "Total transaction submissions by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(transactions_received.clone()))?;

        let downstream_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "downstream_request_duration_seconds",
                "Duration of calls to the transaction log service",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["outcome"],
        )?;
        registry.register(Box::new(downstream_request_duration.clone()))?;

        Ok(Self {
            registry,
            orders_received,
            transactions_received,
            downstream_request_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order(&self, outcome: &str) {
        self.orders_received.with_label_values(&[outcome]).inc();
    }

    pub fn record_transaction(&self, outcome: &str) {
        self.transactions_received.with_label_values(&[outcome]).inc();
    }

    pub fn record_downstream_call(&self, outcome: &str, duration_secs: f64) {
        self.downstream_request_duration
            .with_label_values(&[outcome])
            .observe(duration_secs);
    }
}
