use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::order::{Order, OrderStatus};
use super::column::{BoardColumns, OrderStatusColumn};
use super::errors::BoardError;

// ============================================================================
// Board Projector - column view over a snapshot of orders
// ============================================================================
//
// Pure functions over a snapshot. Orders whose status has no column are
// left off the board; the board only shows the configured part of the
// lifecycle.
//
// ============================================================================

/// One rendered column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLane {
    pub title: String,
    pub color: String,
    pub orders: Vec<Order>,
}

/// Projection result, lanes in configuration order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    pub lanes: Vec<BoardLane>,
}

impl Board {
    pub fn orders_in(&self, title: &str) -> Option<&[Order]> {
        self.lanes
            .iter()
            .find(|lane| lane.title == title)
            .map(|lane| lane.orders.as_slice())
    }

    pub fn total_orders(&self) -> usize {
        self.lanes.iter().map(|lane| lane.orders.len()).sum()
    }

    pub fn lane_of(&self, order_id: &str) -> Option<&str> {
        self.lanes
            .iter()
            .find(|lane| lane.orders.iter().any(|o| o.id == order_id))
            .map(|lane| lane.title.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoardProjector {
    columns: BoardColumns,
}

impl BoardProjector {
    pub fn new(columns: BoardColumns) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &BoardColumns {
        &self.columns
    }

    /// Partition `orders` into the configured columns, keeping input order
    /// within each column.
    pub fn project(&self, orders: &[Order]) -> Board {
        let lanes = self
            .columns
            .as_slice()
            .iter()
            .map(|column| BoardLane {
                title: column.title.clone(),
                color: column.color.clone(),
                orders: orders
                    .iter()
                    .filter(|order| column.contains(order.status))
                    .cloned()
                    .collect(),
            })
            .collect();

        Board { lanes }
    }

    /// Column showing `status`, or `None` when the status is not on this board
    pub fn column_for(&self, status: OrderStatus) -> Option<&OrderStatusColumn> {
        self.columns.as_slice().iter().find(|column| column.contains(status))
    }

    /// Status an order moves to when advanced out of `current_column`.
    ///
    /// Returns `Ok(None)` on the last column. The order's own status is not
    /// consulted; the move is defined by column position alone.
    pub fn advance(
        &self,
        order: &Order,
        current_column: &OrderStatusColumn,
    ) -> Result<Option<OrderStatus>, BoardError> {
        let Some(index) = self.columns.position(current_column) else {
            tracing::error!(
                order_id = %order.id,
                column = %current_column.title,
                "Advance requested from a column outside the board configuration"
            );
            return Err(BoardError::UnknownColumn(current_column.title.clone()));
        };

        let next = self
            .columns
            .as_slice()
            .get(index + 1)
            .map(OrderStatusColumn::entry_status);

        tracing::debug!(
            order_id = %order.id,
            from_column = %current_column.title,
            next_status = ?next,
            "Computed advance"
        );

        Ok(next)
    }
}

/// Relative age label for an order: "now", "<n> min ago" or "<n> h ago".
pub fn elapsed(order: &Order, now: DateTime<Utc>) -> String {
    elapsed_since(order.created_at, now)
}

pub fn elapsed_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();

    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }
    format!("{} h ago", minutes / 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::domain::order::{OrderItem, OrderType};

    fn order(id: &str, status: OrderStatus) -> Order {
        Order::new(
            format!("#{id}"),
            "Customer",
            "(11) 90000-0000",
            OrderType::Pickup,
            vec![OrderItem::new("1", "Pastel", 1, 8.0)],
        )
        .with_id(id)
        .with_status(status)
    }

    fn lane_ids<'a>(board: &'a Board, title: &str) -> Vec<&'a str> {
        board.orders_in(title).unwrap().iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_project_partitions_by_status() {
        let projector = BoardProjector::default();
        let orders = vec![
            order("1", OrderStatus::Pending),
            order("2", OrderStatus::Ready),
            order("3", OrderStatus::InProduction),
            order("4", OrderStatus::Pending),
        ];

        let board = projector.project(&orders);

        let titles: Vec<_> = board.lanes.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Pending", "In Production", "Ready"]);
        assert_eq!(lane_ids(&board, "Pending"), vec!["1", "4"]);
        assert_eq!(lane_ids(&board, "In Production"), vec!["3"]);
        assert_eq!(lane_ids(&board, "Ready"), vec!["2"]);
    }

    #[test]
    fn test_project_drops_unmapped_statuses() {
        let projector = BoardProjector::default();
        let orders = vec![
            order("1", OrderStatus::OutForDelivery),
            order("2", OrderStatus::Delivered),
            order("3", OrderStatus::Cancelled),
            order("4", OrderStatus::Ready),
        ];

        let board = projector.project(&orders);

        assert_eq!(board.total_orders(), 1);
        assert_eq!(board.lane_of("4"), Some("Ready"));
        assert_eq!(board.lane_of("1"), None);
        assert!(projector.column_for(OrderStatus::Cancelled).is_none());
    }

    #[test]
    fn test_project_never_duplicates_orders() {
        let columns = BoardColumns::new(vec![
            OrderStatusColumn::new("Kitchen", vec![OrderStatus::Pending, OrderStatus::InProduction], "#000"),
            OrderStatusColumn::new("Leaving", vec![OrderStatus::Ready, OrderStatus::OutForDelivery], "#111"),
        ])
        .unwrap();
        let projector = BoardProjector::new(columns);

        let orders: Vec<Order> = OrderStatus::ALL
            .iter()
            .enumerate()
            .map(|(i, status)| order(&i.to_string(), *status))
            .collect();

        let board = projector.project(&orders);

        let mut seen = std::collections::HashSet::new();
        for lane in &board.lanes {
            for o in &lane.orders {
                assert!(seen.insert(o.id.clone()), "order {} appears twice", o.id);
                assert!(orders.contains(o));
            }
        }
        assert_eq!(seen.len(), 4);
        assert_eq!(lane_ids(&board, "Kitchen"), vec!["0", "1"]);
    }

    #[test]
    fn test_project_empty_input() {
        let board = BoardProjector::default().project(&[]);
        assert_eq!(board.lanes.len(), 3);
        assert_eq!(board.total_orders(), 0);
    }

    #[test]
    fn test_advance_returns_first_status_of_next_column() {
        let projector = BoardProjector::default();
        let columns = projector.columns().as_slice().to_vec();

        let o = order("1", OrderStatus::Pending);
        assert_eq!(projector.advance(&o, &columns[0]).unwrap(), Some(OrderStatus::InProduction));
        assert_eq!(projector.advance(&o, &columns[1]).unwrap(), Some(OrderStatus::Ready));
    }

    #[test]
    fn test_advance_ignores_order_status() {
        let projector = BoardProjector::default();
        let pending = projector.columns().as_slice()[0].clone();

        for status in OrderStatus::ALL {
            let o = order("1", status);
            assert_eq!(projector.advance(&o, &pending).unwrap(), Some(OrderStatus::InProduction));
        }
    }

    #[test]
    fn test_advance_on_last_column_is_none() {
        let projector = BoardProjector::default();
        let last = projector.columns().as_slice().last().unwrap().clone();

        for status in OrderStatus::ALL {
            assert_eq!(projector.advance(&order("1", status), &last).unwrap(), None);
        }
    }

    #[test]
    fn test_advance_uses_first_status_of_multi_status_column() {
        let columns = BoardColumns::new(vec![
            OrderStatusColumn::new("New", vec![OrderStatus::Pending], "#000"),
            OrderStatusColumn::new("Leaving", vec![OrderStatus::OutForDelivery, OrderStatus::Ready], "#111"),
        ])
        .unwrap();
        let projector = BoardProjector::new(columns.clone());

        let next = projector.advance(&order("1", OrderStatus::Pending), &columns.as_slice()[0]).unwrap();
        assert_eq!(next, Some(OrderStatus::OutForDelivery));
    }

    #[test]
    fn test_advance_unknown_column_fails() {
        let projector = BoardProjector::default();
        let stranger = OrderStatusColumn::new("Delivered", vec![OrderStatus::Delivered], "#999");

        let result = projector.advance(&order("1", OrderStatus::Pending), &stranger);
        assert_eq!(result.unwrap_err(), BoardError::UnknownColumn("Delivered".to_string()));
    }

    #[test]
    fn test_advance_column_matched_by_value() {
        let projector = BoardProjector::default();
        let renamed_color = OrderStatusColumn::new("Pending", vec![OrderStatus::Pending], "#000000");

        assert!(projector.advance(&order("1", OrderStatus::Pending), &renamed_color).is_err());
    }

    #[test]
    fn test_column_for() {
        let projector = BoardProjector::default();
        assert_eq!(projector.column_for(OrderStatus::Ready).unwrap().title, "Ready");
        assert!(projector.column_for(OrderStatus::OutForDelivery).is_none());
    }

    #[test]
    fn test_elapsed_boundaries() {
        let now = Utc::now();
        let label = |ago: Duration| elapsed_since(now - ago, now);

        assert_eq!(label(Duration::seconds(30)), "now");
        assert_eq!(label(Duration::seconds(59)), "now");
        assert_eq!(label(Duration::minutes(1)), "1 min ago");
        assert_eq!(label(Duration::minutes(5)), "5 min ago");
        assert_eq!(label(Duration::minutes(59)), "59 min ago");
        assert_eq!(label(Duration::seconds(59 * 60 + 59)), "59 min ago");
        assert_eq!(label(Duration::minutes(60)), "1 h ago");
        assert_eq!(label(Duration::minutes(125)), "2 h ago");
    }

    #[test]
    fn test_elapsed_future_timestamp_is_now() {
        let now = Utc::now();
        assert_eq!(elapsed_since(now + Duration::minutes(3), now), "now");
    }

    #[test]
    fn test_elapsed_uses_created_at() {
        let now = Utc::now();
        let o = order("1", OrderStatus::Pending).with_created_at(now - Duration::minutes(15));
        assert_eq!(elapsed(&o, now), "15 min ago");
    }
}
