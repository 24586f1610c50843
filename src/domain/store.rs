use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use super::order::{DeliveryType, LineItem, Order, OrderStatus};

/// In-memory system of record for orders, most-recently-created first.
///
/// A pure container: no validation, no locking. The owning actor serializes
/// every mutation and snapshot read (see `actors`), which is what makes the
/// prepend atomic on a multi-threaded runtime.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    orders: Vec<Order>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Store preloaded with the demo catalog the orders page ships with.
    pub fn seeded() -> Self {
        let orders = vec![
            Order {
                id: "ORD-001".to_string(),
                customer_name: "Juan Pérez".to_string(),
                total: Decimal::new(8500, 2),
                status: OrderStatus::Pagado,
                payment_method: "Yape".to_string(),
                delivery_type: DeliveryType::Delivery,
                address: Some("Av. Javier Prado 123, Lima".to_string()),
                date: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
                items: vec![
                    LineItem::new("JavaScript Avanzado", Decimal::new(2500, 2), 1),
                    LineItem::new("React Fundamentals", Decimal::new(3000, 2), 2),
                ],
            },
            Order {
                id: "ORD-002".to_string(),
                customer_name: "María García".to_string(),
                total: Decimal::new(4500, 2),
                status: OrderStatus::Pendiente,
                payment_method: "Transferencia".to_string(),
                delivery_type: DeliveryType::Recojo,
                address: None,
                date: Utc.with_ymd_and_hms(2025, 1, 15, 14, 15, 0).unwrap(),
                items: vec![
                    LineItem::new("Node.js Patterns", Decimal::new(1500, 2), 1),
                    LineItem::new("CSS Grid Layout", Decimal::new(3000, 2), 1),
                ],
            },
            Order {
                id: "ORD-003".to_string(),
                customer_name: "Carlos López".to_string(),
                total: Decimal::new(12000, 2),
                status: OrderStatus::Enviado,
                payment_method: "Visa".to_string(),
                delivery_type: DeliveryType::Delivery,
                address: Some("Jr. de la Unión 456, Lima".to_string()),
                date: Utc.with_ymd_and_hms(2025, 1, 14, 16, 45, 0).unwrap(),
                items: vec![
                    LineItem::new("Python Data Science", Decimal::new(4000, 2), 2),
                    LineItem::new("Machine Learning", Decimal::new(4000, 2), 1),
                ],
            },
        ];
        Self { orders }
    }

    /// Prepends an order. No validation is performed here.
    pub fn insert_front(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    /// Non-destructive copy of the current contents, most recent first.
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
