// ============================================================================
// Order Domain
// ============================================================================
//
// - Value objects (OrderItem, OrderStatus, OrderType)
// - Order entity
// - Errors (OrderError enum)
// - Demo seed data
//
// ============================================================================

pub mod value_objects;
pub mod errors;
pub mod aggregate;
pub mod seed;

// Re-export for convenience
pub use value_objects::*;
pub use errors::*;
pub use aggregate::*;
pub use seed::demo_orders;
