use crate::domain::order::OrderStatus;

// ============================================================================
// Board Configuration and Projection Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("Column is not part of the board configuration: {0}")]
    UnknownColumn(String),

    #[error("Board needs at least one column")]
    NoColumns,

    #[error("Column has no statuses: {0}")]
    EmptyColumn(String),

    #[error("Duplicate column title: {0}")]
    DuplicateTitle(String),

    #[error("Status {status} mapped to more than one column ({first}, {second})")]
    OverlappingStatus {
        status: OrderStatus,
        first: String,
        second: String,
    },

    #[error("Invalid column configuration: {0}")]
    InvalidJson(String),
}
