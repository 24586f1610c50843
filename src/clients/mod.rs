use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::app_system::MockLatency;
use crate::domain::{CheckoutInput, Order};
use crate::error::OrderError;
use crate::messages::OrderRequest;

// =============================================================================
// CLIENT METHOD MACRO
// =============================================================================

/// Generate client methods with the simulated network latency, oneshot
/// channel boilerplate and automatic tracing. A closed or dropped service
/// channel surfaces as the operation's generic failure, the same condition
/// a real backend outage would produce.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, fail = $fail:expr, latency = $latency:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, OrderError> {
                debug!("Sending request");
                tokio::time::sleep(self.latency.$latency).await;
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| $fail("order service unavailable".to_string()))?;

                response.await.map_err(|_| $fail("order service dropped the request".to_string()))?
            }
        }
    };
}

// =============================================================================
// ORDER CLIENT
// =============================================================================

/// Handle for calling the order actor.
///
/// Each operation first awaits its configured mock latency to emulate the
/// network round-trip a real deployment would spend on an HTTP call; the
/// write path is slower than the read path. Swapping in a real backend
/// replaces these method bodies and nothing else.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
    latency: MockLatency,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>, latency: MockLatency) -> Self {
        Self { sender, latency }
    }

    /// Ask the actor to stop. No response channel; the system coordinator
    /// awaits the join handle afterwards.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), String> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

// Generate the two storefront operations
client_method!(OrderClient => fn list_orders() -> Vec<Order> as OrderRequest::ListOrders, fail = OrderError::RetrievalFailed, latency = list);
client_method!(OrderClient => fn create_order(input: CheckoutInput) -> Order as OrderRequest::CreateOrder, fail = OrderError::CreationFailed, latency = create);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(OrderClient => fn get_order_count() -> usize as OrderRequest::GetOrderCount, fail = OrderError::RetrievalFailed, latency = list);
