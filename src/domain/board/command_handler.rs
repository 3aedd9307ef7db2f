use std::sync::Arc;

use anyhow::Result;

use crate::domain::order::Order;
use crate::metrics::Metrics;
use crate::store::OrderStore;
use super::errors::BoardError;
use super::projector::{Board, BoardProjector};

// ============================================================================
// Board Command Handler
// ============================================================================
//
// Orchestrates: column lookup → advance → store update → full re-read
//
// The board is never patched locally; every successful write is followed by
// a fresh projection of `list_all`.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Status written; `board` is the projection after the write
    Advanced { order: Order, board: Board },
    /// The order sits in the last column, nothing was written
    AtLastColumn,
}

pub struct BoardCommandHandler<S: OrderStore> {
    store: Arc<S>,
    projector: BoardProjector,
    metrics: Option<Arc<Metrics>>,
}

impl<S: OrderStore> BoardCommandHandler<S> {
    pub fn new(store: Arc<S>, projector: BoardProjector) -> Self {
        Self {
            store,
            projector,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn projector(&self) -> &BoardProjector {
        &self.projector
    }

    /// Read every order and project it onto the board
    pub async fn load_board(&self) -> Board {
        let orders = self.store.list_all().await;
        let board = self.projector.project(&orders);

        tracing::debug!(
            total_orders = orders.len(),
            on_board = board.total_orders(),
            "Board loaded"
        );

        board
    }

    /// Move an order from `column_title` to the next column
    pub async fn advance_order(&self, order_id: &str, column_title: &str) -> Result<AdvanceOutcome> {
        let column = self
            .projector
            .columns()
            .by_title(column_title)
            .cloned()
            .ok_or_else(|| BoardError::UnknownColumn(column_title.to_string()))?;

        let order = self.store.get(order_id).await?;

        if !column.contains(order.status) {
            tracing::warn!(
                order_id = %order.id,
                status = %order.status,
                column = %column.title,
                "Advancing order from a column that does not hold its status"
            );
        }

        let Some(next_status) = self.projector.advance(&order, &column)? else {
            tracing::info!(order_id = %order.id, column = %column.title, "Order already in last column");
            self.record_advance("at_last_column");
            return Ok(AdvanceOutcome::AtLastColumn);
        };

        let updated = self.store.update_status(&order.id, next_status).await?;
        self.record_advance("advanced");

        let board = self.load_board().await;

        Ok(AdvanceOutcome::Advanced { order: updated, board })
    }

    fn record_advance(&self, outcome: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record_advance(outcome);
        }
    }
}
