use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{OrderItem, OrderStatus, OrderType};

// ============================================================================
// Order - one customer order moving through preparation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    // Identity
    pub id: String,
    pub order_number: String,

    // Customer
    pub customer_name: String,
    pub customer_phone: String,

    // Contents
    pub items: Vec<OrderItem>,
    pub total_amount: f64,

    // Workflow
    pub status: OrderStatus,
    pub order_type: OrderType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,

    // Timing
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// New pending order with a generated id. The total is taken from the
    /// items once here; later changes to either side are not reconciled.
    pub fn new(
        order_number: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        order_type: OrderType,
        items: Vec<OrderItem>,
    ) -> Self {
        let total_amount = items.iter().map(|item| item.total_price).sum();
        Self {
            id: Uuid::new_v4().to_string(),
            order_number: order_number.into(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            order_type,
            delivery_address: None,
            created_at: Utc::now(),
            estimated_time: None,
            notes: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_delivery_address(mut self, address: impl Into<String>) -> Self {
        self.delivery_address = Some(address.into());
        self
    }

    pub fn with_estimated_time(mut self, minutes: u32) -> Self {
        self.estimated_time = Some(minutes);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Number of units across all lines
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of the stored line totals; may differ from `total_amount`
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }

    pub fn is_delivery(&self) -> bool {
        self.order_type == OrderType::Delivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_order() -> Order {
        Order::new(
            "#001",
            "João Silva",
            "(11) 98765-4321",
            OrderType::Delivery,
            vec![
                OrderItem::new("1", "Pizza Margherita", 1, 45.0),
                OrderItem::new("2", "Coca-Cola 2L", 2, 10.0),
            ],
        )
    }

    #[test]
    fn test_new_order_defaults() {
        let order = create_test_order();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, 65.0);
        assert!(Uuid::parse_str(&order.id).is_ok());
        assert!(order.is_delivery());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(create_test_order().id, create_test_order().id);
    }

    #[test]
    fn test_total_items_sums_quantities() {
        assert_eq!(create_test_order().total_items(), 3);
    }

    #[test]
    fn test_empty_items_accepted() {
        let order = Order::new("#009", "Ana", "", OrderType::Pickup, vec![]);
        assert_eq!(order.total_items(), 0);
        assert_eq!(order.total_amount, 0.0);
    }

    #[test]
    fn test_total_amount_not_reconciled() {
        let mut order = create_test_order();
        order.total_amount = 99.0;

        assert_eq!(order.items_total(), 65.0);
        assert_eq!(order.total_amount, 99.0);
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let order = create_test_order()
            .with_id("1")
            .with_delivery_address("Rua das Flores, 123")
            .with_estimated_time(45);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderNumber"], "#001");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["orderType"], "delivery");
        assert_eq!(json["estimatedTime"], 45);
        assert!(json.get("notes").is_none());

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
    }
}
