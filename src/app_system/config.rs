use std::time::Duration;

use rust_decimal::Decimal;

use crate::domain::LineItem;

/// Simulated network round-trip times for the mock operations.
///
/// The write path is deliberately slower than the read path, matching the
/// feel of a real create call. A real backend swap deletes these sleeps
/// without touching any operation signature.
#[derive(Debug, Clone, Copy)]
pub struct MockLatency {
    pub list: Duration,
    pub create: Duration,
}

impl Default for MockLatency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            create: Duration::from_millis(800),
        }
    }
}

impl MockLatency {
    /// No sleeps at all. Used by tests and by callers that want the store
    /// semantics without the network theater.
    #[allow(dead_code)]
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            create: Duration::ZERO,
        }
    }
}

/// How the `total` of a new order is computed.
///
/// The demo storefront charges a fixed amount regardless of the basket;
/// that mismatch is intentional and preserved as the default.
#[derive(Debug, Clone, PartialEq)]
pub enum TotalPolicy {
    /// Every new order gets this amount.
    Fixed(Decimal),
    /// Derive the total from the line items (price * qty).
    SumOfItems,
}

/// Construction-time settings for the order service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Channel capacity between client and actor.
    pub buffer_size: usize,
    pub latency: MockLatency,
    pub total_policy: TotalPolicy,
    /// Basket attached to every created order while checkout has no real cart.
    pub demo_items: Vec<LineItem>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            latency: MockLatency::default(),
            total_policy: TotalPolicy::Fixed(Decimal::new(5500, 2)),
            demo_items: vec![
                LineItem::new("JavaScript Avanzado", Decimal::new(2500, 2), 1),
                LineItem::new("React Fundamentals", Decimal::new(3000, 2), 1),
            ],
        }
    }
}

impl ServiceConfig {
    /// Default settings with the sleeps removed.
    #[allow(dead_code)]
    pub fn without_latency() -> Self {
        Self {
            latency: MockLatency::none(),
            ..Self::default()
        }
    }
}
