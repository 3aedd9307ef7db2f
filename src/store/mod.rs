// ============================================================================
// Order Store
// ============================================================================
//
// - config/      - latency and transition policy
// - order_store/ - OrderStore trait and the in-memory implementation
//
// ============================================================================

mod config;
mod order_store;

pub use config::{StoreConfig, TransitionPolicy};
pub use order_store::{InMemoryOrderStore, OrderStore};
