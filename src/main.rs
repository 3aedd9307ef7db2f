use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use chrono::Utc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_board::domain::board::{elapsed, AdvanceOutcome, Board, BoardColumns, BoardCommandHandler, BoardProjector};
use order_board::domain::order::demo_orders;
use order_board::metrics::Metrics;
use order_board::store::{InMemoryOrderStore, StoreConfig};

fn load_columns() -> anyhow::Result<BoardColumns> {
    match std::env::var("ORDER_BOARD_COLUMNS") {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading column configuration from {path}"))?;
            let columns = BoardColumns::from_json(&json)?;
            tracing::info!(path = %path, columns = columns.len(), "Loaded board columns");
            Ok(columns)
        }
        Err(_) => Ok(BoardColumns::default()),
    }
}

fn load_store_config() -> anyhow::Result<StoreConfig> {
    let config = StoreConfig::default();
    match std::env::var("ORDER_BOARD_LATENCY_MS") {
        Ok(ms) => {
            let ms: u64 = ms.parse().context("ORDER_BOARD_LATENCY_MS must be an integer")?;
            Ok(config.with_latency(Duration::from_millis(ms)))
        }
        Err(_) => Ok(config),
    }
}

fn log_board(board: &Board) {
    let now = Utc::now();
    for lane in &board.lanes {
        tracing::info!(column = %lane.title, color = %lane.color, orders = lane.orders.len(), "Column");
        for order in &lane.orders {
            tracing::info!(
                order_number = %order.order_number,
                customer = %order.customer_name,
                items = order.total_items(),
                total = order.total_amount,
                age = %elapsed(order, now),
                "  order"
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_board=debug"))
        )
        .init();

    tracing::info!("Starting order board demo");

    let metrics = Arc::new(Metrics::new()?);
    let store = InMemoryOrderStore::with_orders(load_store_config()?, demo_orders(Utc::now()))?
        .with_metrics(metrics.clone());
    let handler = BoardCommandHandler::new(Arc::new(store), BoardProjector::new(load_columns()?))
        .with_metrics(metrics.clone());

    let board = handler.load_board().await;
    log_board(&board);

    // Move the oldest pending order along, then try to push a ready order off the board
    let Some(first_column) = board.lanes.first() else {
        return Ok(());
    };
    if let Some(order) = first_column.orders.last() {
        match handler.advance_order(&order.id, &first_column.title).await? {
            AdvanceOutcome::Advanced { order, board } => {
                tracing::info!(order_number = %order.order_number, status = %order.status, "Order advanced");
                log_board(&board);
            }
            AdvanceOutcome::AtLastColumn => {
                tracing::info!(order_number = %order.order_number, "Order already in last column");
            }
        }
    }

    if let Some(last_column) = board.lanes.last() {
        if let Some(order) = last_column.orders.first() {
            let outcome = handler.advance_order(&order.id, &last_column.title).await?;
            tracing::info!(order_number = %order.order_number, outcome = %outcome_name(&outcome), "Advance from last column");
        }
    }

    tracing::debug!("Metrics:\n{}", metrics.render()?);
    tracing::info!("Demo complete");

    Ok(())
}

fn outcome_name(outcome: &AdvanceOutcome) -> &'static str {
    match outcome {
        AdvanceOutcome::Advanced { .. } => "advanced",
        AdvanceOutcome::AtLastColumn => "at_last_column",
    }
}
