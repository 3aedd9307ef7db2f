// ============================================================================
// Domain Layer
// ============================================================================
//
// - order/ - order entity, status lifecycle, errors, seed data
// - board/ - column configuration, projection and the advance workflow
//
// ============================================================================

pub mod order;
pub mod board;
