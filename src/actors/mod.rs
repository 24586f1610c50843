use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

use crate::app_system::{ServiceConfig, TotalPolicy};
use crate::clients::OrderClient;
use crate::domain::{CheckoutInput, DeliveryType, Order, OrderStatus, OrderStore};
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};

// =============================================================================
// ORDER SERVICE
// =============================================================================

/// Order management actor.
///
/// Owns the in-memory store; the single-consumer run loop serializes every
/// mutation and snapshot read, so the prepend is atomic without a lock even
/// on a multi-threaded runtime.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    store: OrderStore,
    config: ServiceConfig,
    next_id: u64,
}

impl OrderService {
    #[allow(dead_code)]
    pub fn new(config: ServiceConfig) -> (Self, OrderClient) {
        Self::with_store(config, OrderStore::new())
    }

    /// Builds the service around an existing store, so callers (and tests)
    /// supply an isolated instance instead of sharing process-wide state.
    pub fn with_store(config: ServiceConfig, store: OrderStore) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(config.buffer_size);
        let client = OrderClient::new(sender, config.latency);
        // Continue numbering past whatever the store was seeded with.
        let next_id = store.len() as u64 + 1;
        let service = Self {
            receiver,
            store,
            config,
            next_id,
        };
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::ListOrders { respond_to } => {
                    self.handle_list_orders(respond_to);
                }
                OrderRequest::CreateOrder { input, respond_to } => {
                    self.handle_create_order(input, respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
                #[cfg(test)]
                OrderRequest::GetOrderCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!("OrderService stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_orders(&self, respond_to: ServiceResponse<Vec<Order>, OrderError>) {
        debug!("Processing list_orders request");

        let orders = self.store.snapshot();
        info!(order_count = orders.len(), "Listed orders");

        let _ = respond_to.send(Ok(orders));
    }

    /// Synthesizes the new order and prepends it to the store.
    ///
    /// All-or-nothing: the value inserted and the value returned are the
    /// same; nothing is stored unless construction completes.
    #[instrument(
        fields(customer_name = %input.customer_name, delivery_type = %input.delivery_type),
        skip(self, input, respond_to)
    )]
    fn handle_create_order(
        &mut self,
        input: CheckoutInput,
        respond_to: ServiceResponse<Order, OrderError>,
    ) {
        debug!("Processing create_order request");

        let id = format!("ORD-{:03}", self.next_id);
        self.next_id += 1;

        // Checkout has no real cart yet; every order gets the demo basket.
        let items = self.config.demo_items.clone();
        let total = match &self.config.total_policy {
            TotalPolicy::Fixed(amount) => *amount,
            TotalPolicy::SumOfItems => items
                .iter()
                .map(|item| item.price * Decimal::from(item.qty))
                .sum(),
        };
        let address = match input.delivery_type {
            DeliveryType::Delivery => input.address,
            DeliveryType::Recojo => None,
        };

        let order = Order {
            id: id.clone(),
            customer_name: input.customer_name,
            total,
            status: OrderStatus::Pagado,
            payment_method: input.payment_method.to_string(),
            delivery_type: input.delivery_type,
            address,
            date: Utc::now(),
            items,
        };

        self.store.insert_front(order.clone());

        info!(order_id = %id, total = %order.total, "Order created successfully");
        let _ = respond_to.send(Ok(order));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentMethod;

    #[tokio::test]
    async fn create_order_increments_the_store_count() {
        let (service, client) = OrderService::new(ServiceConfig::without_latency());
        let _handle = tokio::spawn(service.run());

        assert_eq!(client.get_order_count().await.unwrap(), 0);

        let order = client
            .create_order(CheckoutInput::pickup("Ana Ruiz", PaymentMethod::Efectivo))
            .await
            .unwrap();

        assert_eq!(order.id, "ORD-001");
        assert_eq!(order.status, OrderStatus::Pagado);
        assert_eq!(client.get_order_count().await.unwrap(), 1);

        client.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn id_numbering_continues_past_a_seeded_store() {
        let (service, client) =
            OrderService::with_store(ServiceConfig::without_latency(), OrderStore::seeded());
        let _handle = tokio::spawn(service.run());

        let order = client
            .create_order(CheckoutInput::pickup("Ana Ruiz", PaymentMethod::Efectivo))
            .await
            .unwrap();

        assert_eq!(order.id, "ORD-004");

        client.shutdown().await.unwrap();
    }
}
