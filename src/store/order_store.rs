use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::order::{Order, OrderError, OrderStatus};
use crate::metrics::Metrics;
use super::config::{StoreConfig, TransitionPolicy};

// ============================================================================
// Order Store - sole owner of order state
// ============================================================================
//
// Responsibilities:
// 1. Hold the order collection in insertion order
// 2. Serve full and status-filtered reads
// 3. Apply status changes atomically per order
//
// The trait is the seam where a persistence backend replaces the in-memory
// implementation. Orders are never removed.
//
// ============================================================================

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Every order, in insertion order
    async fn list_all(&self) -> Vec<Order>;

    /// Orders whose status is in `statuses`, in insertion order
    async fn list_by_status(&self, statuses: &[OrderStatus]) -> Vec<Order>;

    async fn get(&self, order_id: &str) -> Result<Order, OrderError>;

    /// Overwrite the status of one order and return the updated order.
    /// On error the order is left untouched.
    async fn update_status(&self, order_id: &str, new_status: OrderStatus) -> Result<Order, OrderError>;
}

pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
    config: StoreConfig,
    metrics: Option<Arc<Metrics>>,
}

impl InMemoryOrderStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            orders: RwLock::new(Vec::new()),
            config,
            metrics: None,
        }
    }

    /// Store pre-populated with `orders`; ids must be unique
    pub fn with_orders(config: StoreConfig, orders: Vec<Order>) -> Result<Self, OrderError> {
        let mut seen = HashSet::new();
        for order in &orders {
            if !seen.insert(order.id.as_str()) {
                return Err(OrderError::DuplicateId(order.id.clone()));
            }
        }

        tracing::debug!(order_count = orders.len(), "Seeded in-memory order store");

        Ok(Self {
            orders: RwLock::new(orders),
            config,
            metrics: None,
        })
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        if let Ok(orders) = self.orders.try_read() {
            metrics.orders_held.set(orders.len() as i64);
        }
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Stand-in for backend round trip. Always suspends at least once.
    async fn simulate_latency(&self) {
        if self.config.latency.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.config.latency).await;
        }
    }

    fn record_operation(&self, operation: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record_store_operation(operation);
        }
    }

    fn record_failure(&self, operation: &str, error: &OrderError) {
        if let Some(metrics) = &self.metrics {
            let reason = match error {
                OrderError::NotFound(_) => "not_found",
                OrderError::DuplicateId(_) => "duplicate_id",
                OrderError::InvalidStatusTransition { .. } => "invalid_transition",
            };
            metrics.record_store_failure(operation, reason);
        }
    }

    fn check_transition(&self, from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        match self.config.transition_policy {
            TransitionPolicy::Unrestricted => Ok(()),
            TransitionPolicy::ForwardOnly if from == to || from.can_transition_to(to) => Ok(()),
            TransitionPolicy::ForwardOnly => Err(OrderError::InvalidStatusTransition { from, to }),
        }
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list_all(&self) -> Vec<Order> {
        self.simulate_latency().await;
        self.record_operation("list_all");

        self.orders.read().await.clone()
    }

    async fn list_by_status(&self, statuses: &[OrderStatus]) -> Vec<Order> {
        self.simulate_latency().await;
        self.record_operation("list_by_status");

        self.orders
            .read()
            .await
            .iter()
            .filter(|order| statuses.contains(&order.status))
            .cloned()
            .collect()
    }

    async fn get(&self, order_id: &str) -> Result<Order, OrderError> {
        self.simulate_latency().await;
        self.record_operation("get");

        let result = self
            .orders
            .read()
            .await
            .iter()
            .find(|order| order.id == order_id)
            .cloned()
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()));

        if let Err(e) = &result {
            self.record_failure("get", e);
        }
        result
    }

    async fn update_status(&self, order_id: &str, new_status: OrderStatus) -> Result<Order, OrderError> {
        self.simulate_latency().await;
        self.record_operation("update_status");

        let mut orders = self.orders.write().await;

        let Some(order) = orders.iter_mut().find(|order| order.id == order_id) else {
            let error = OrderError::NotFound(order_id.to_string());
            tracing::warn!(order_id = %order_id, status = %new_status, "Status update for unknown order");
            self.record_failure("update_status", &error);
            return Err(error);
        };

        let previous = order.status;
        if let Err(error) = self.check_transition(previous, new_status) {
            tracing::warn!(
                order_id = %order_id,
                from_status = %previous,
                to_status = %new_status,
                "Rejected status transition"
            );
            self.record_failure("update_status", &error);
            return Err(error);
        }

        order.status = new_status;

        tracing::info!(
            order_id = %order_id,
            order_number = %order.order_number,
            from_status = %previous,
            to_status = %new_status,
            "Order status updated"
        );

        if let Some(metrics) = &self.metrics {
            metrics.record_transition(previous.as_str(), new_status.as_str());
        }

        Ok(order.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
