use chrono::{DateTime, Duration, Utc};

use super::aggregate::Order;
use super::value_objects::{OrderItem, OrderStatus, OrderType};

/// Demo orders spread over the three board columns, timestamped relative to `now`.
pub fn demo_orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order::new(
            "#001",
            "João Silva",
            "(11) 98765-4321",
            OrderType::Delivery,
            vec![
                OrderItem::new("1", "Pizza Margherita", 1, 45.00),
                OrderItem::new("2", "Coca-Cola 2L", 1, 10.00),
            ],
        )
        .with_id("1")
        .with_delivery_address("Rua das Flores, 123 - Centro")
        .with_created_at(now)
        .with_estimated_time(45)
        .with_notes("Sem cebola"),
        Order::new(
            "#002",
            "Maria Santos",
            "(11) 91234-5678",
            OrderType::Delivery,
            vec![
                OrderItem::new("3", "Hambúrguer Artesanal", 2, 35.00),
                OrderItem::new("4", "Batata Frita", 1, 15.00),
            ],
        )
        .with_id("2")
        .with_delivery_address("Av. Principal, 456 - Jardins")
        .with_created_at(now - Duration::minutes(5))
        .with_estimated_time(50),
        Order::new(
            "#003",
            "Pedro Costa",
            "(11) 99876-5432",
            OrderType::Delivery,
            vec![OrderItem::new("5", "Sushi Combo", 1, 89.90)],
        )
        .with_id("3")
        .with_status(OrderStatus::InProduction)
        .with_delivery_address("Rua do Comércio, 789")
        .with_created_at(now - Duration::minutes(15))
        .with_estimated_time(30),
        Order::new(
            "#004",
            "Ana Oliveira",
            "(11) 97654-3210",
            OrderType::Pickup,
            vec![
                OrderItem::new("6", "Salada Caesar", 1, 32.00),
                OrderItem::new("7", "Suco Natural", 2, 12.00),
            ],
        )
        .with_id("4")
        .with_status(OrderStatus::InProduction)
        .with_created_at(now - Duration::minutes(10))
        .with_estimated_time(20),
        Order::new(
            "#005",
            "Carlos Mendes",
            "(11) 96543-2109",
            OrderType::Delivery,
            vec![OrderItem::new("8", "Açaí 500ml", 2, 25.00)],
        )
        .with_id("5")
        .with_status(OrderStatus::Ready)
        .with_delivery_address("Rua Nova, 321")
        .with_created_at(now - Duration::minutes(20))
        .with_notes("Sem granola"),
        Order::new(
            "#006",
            "Fernanda Lima",
            "(11) 95432-1098",
            OrderType::Pickup,
            vec![OrderItem::new("9", "Pastel de Carne", 4, 8.00)],
        )
        .with_id("6")
        .with_status(OrderStatus::Ready)
        .with_created_at(now - Duration::minutes(25)),
    ]
}
