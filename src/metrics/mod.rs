use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for the order board
// ============================================================================
//
// Provides metrics for:
// - Order store operations (reads, writes, failures)
// - Status transitions applied to orders
// - Board advances and orders left off the board
//
// ============================================================================

/// Central metrics registry for the order board
pub struct Metrics {
    registry: Registry,

    // Store Metrics
    pub store_operations: IntCounterVec,
    pub store_failures: IntCounterVec,
    pub orders_held: IntGauge,

    // Workflow Metrics
    pub status_transitions: IntCounterVec,

    // Board Metrics
    pub board_advances: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // Store Metrics
        let store_operations = IntCounterVec::new(
            Opts::new("order_store_operations_total", "Total order store operations"),
            &["operation"],
        )?;
        registry.register(Box::new(store_operations.clone()))?;

        let store_failures = IntCounterVec::new(
            Opts::new("order_store_failures_total", "Order store operations that returned an error"),
            &["operation", "reason"],
        )?;
        registry.register(Box::new(store_failures.clone()))?;

        let orders_held = IntGauge::new("order_store_orders", "Orders currently held by the store")?;
        registry.register(Box::new(orders_held.clone()))?;

        // Workflow Metrics
        let status_transitions = IntCounterVec::new(
            Opts::new("order_status_transitions_total", "Order status changes applied"),
            &["from_status", "to_status"],
        )?;
        registry.register(Box::new(status_transitions.clone()))?;

        // Board Metrics
        let board_advances = IntCounterVec::new(
            Opts::new("board_advances_total", "Advance requests by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(board_advances.clone()))?;

        Ok(Self {
            registry,
            store_operations,
            store_failures,
            orders_held,
            status_transitions,
            board_advances,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_store_operation(&self, operation: &str) {
        self.store_operations.with_label_values(&[operation]).inc();
    }

    pub fn record_store_failure(&self, operation: &str, reason: &str) {
        self.store_failures.with_label_values(&[operation, reason]).inc();
    }

    pub fn record_transition(&self, from_status: &str, to_status: &str) {
        self.status_transitions.with_label_values(&[from_status, to_status]).inc();
    }

    pub fn record_advance(&self, outcome: &str) {
        self.board_advances.with_label_values(&[outcome]).inc();
    }

    /// Text exposition format of everything registered
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.orders_held.set(0);
        assert!(!metrics.registry().gather().is_empty());
    }

    #[test]
    fn test_record_transition() {
        let metrics = Metrics::new().unwrap();
        metrics.record_transition("pending", "in_production");
        metrics.record_transition("pending", "in_production");
        metrics.record_transition("in_production", "ready");

        let counter = metrics.status_transitions.with_label_values(&["pending", "in_production"]);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_record_store_failure() {
        let metrics = Metrics::new().unwrap();
        metrics.record_store_failure("update_status", "not_found");

        let counter = metrics.store_failures.with_label_values(&["update_status", "not_found"]);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_render_contains_metric_names() {
        let metrics = Metrics::new().unwrap();
        metrics.record_store_operation("list_all");
        metrics.record_advance("advanced");

        let text = metrics.render().unwrap();
        assert!(text.contains("order_store_operations_total"));
        assert!(text.contains("board_advances_total"));
    }
}
