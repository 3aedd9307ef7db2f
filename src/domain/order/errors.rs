use super::value_objects::OrderStatus;

// ============================================================================
// Order Store Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order id already present in store: {0}")]
    DuplicateId(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
}
