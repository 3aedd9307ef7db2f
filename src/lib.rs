//! Order status workflow for a restaurant kitchen board: an in-memory order
//! store with simulated backend latency, and a projector that lays orders out
//! in status columns and computes the "advance to next column" move.

pub mod domain;
pub mod metrics;
pub mod store;
