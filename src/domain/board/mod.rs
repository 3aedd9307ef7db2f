// ============================================================================
// Board Domain
// ============================================================================
//
// - Columns (OrderStatusColumn, BoardColumns configuration)
// - Projector (column view, advance policy, elapsed labels)
// - Errors (BoardError enum)
// - Command Handler (advance workflow against an OrderStore)
//
// ============================================================================

pub mod column;
pub mod errors;
pub mod projector;
pub mod command_handler;

// Re-export for convenience
pub use column::*;
pub use errors::*;
pub use projector::*;
pub use command_handler::*;
