//! # Mock Framework
//!
//! Utilities for testing callers of [`OrderClient`] in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list`] or [`expect_create`] to assert behavior.

use tokio::sync::{mpsc, oneshot};

use crate::app_system::MockLatency;
use crate::clients::OrderClient;
use crate::domain::{CheckoutInput, Order};
use crate::error::OrderError;
use crate::messages::OrderRequest;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit/integration tests, we don't want to spin up a full `OrderService`
/// if we are just testing the *caller* side of the channel.
///
/// Instead, we create a "Mock Client". This client sends messages to a channel
/// we control (`receiver`). We can then inspect the messages arriving on that
/// channel and assert they are correct. This allows us to simulate the actor's
/// behavior (success, failure, delays) deterministically. The mock client has
/// no simulated latency so assertions stay fast.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender, MockLatency::none()), receiver)
}

/// Helper to verify that the next message is a ListOrders request
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<oneshot::Sender<Result<Vec<Order>, OrderError>>> {
    match receiver.recv().await {
        Some(OrderRequest::ListOrders { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a CreateOrder request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(CheckoutInput, oneshot::Sender<Result<Order, OrderError>>)> {
    match receiver.recv().await {
        Some(OrderRequest::CreateOrder { input, respond_to }) => Some((input, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeliveryType, Order, OrderStatus, PaymentMethod};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn canned_order(id: &str, input: &CheckoutInput) -> Order {
        Order {
            id: id.to_string(),
            customer_name: input.customer_name.clone(),
            total: Decimal::new(5500, 2),
            status: OrderStatus::Pagado,
            payment_method: input.payment_method.to_string(),
            delivery_type: input.delivery_type,
            address: input.address.clone(),
            date: Utc::now(),
            items: vec![],
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        // Test Create
        let create_task = tokio::spawn(async move {
            let input = CheckoutInput::delivery("Ana Ruiz", "Calle 1", PaymentMethod::Yape);
            client.create_order(input).await
        });

        let (input, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected CreateOrder request");
        assert_eq!(input.customer_name, "Ana Ruiz");
        assert_eq!(input.delivery_type, DeliveryType::Delivery);

        let order = canned_order("ORD-001", &input);
        responder.send(Ok(order.clone())).unwrap();

        let result = create_task.await.unwrap().unwrap();
        assert_eq!(result.id, "ORD-001");
        assert_eq!(result.address.as_deref(), Some("Calle 1"));
    }

    #[tokio::test]
    async fn test_mock_list_failure_propagates() {
        let (client, mut receiver) = create_mock_client(10);

        let list_task = tokio::spawn(async move { client.list_orders().await });

        let responder = expect_list(&mut receiver)
            .await
            .expect("Expected ListOrders request");
        responder
            .send(Err(OrderError::RetrievalFailed("backend down".to_string())))
            .unwrap();

        let result = list_task.await.unwrap();
        assert!(matches!(result, Err(OrderError::RetrievalFailed(_))));
    }
}
