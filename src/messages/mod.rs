use tokio::sync::oneshot;

use crate::domain::{CheckoutInput, Order};
use crate::error::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the order actor. Each variant includes parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum OrderRequest {
    ListOrders {
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    CreateOrder {
        input: CheckoutInput,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    Shutdown,
    #[cfg(test)]
    GetOrderCount {
        respond_to: ServiceResponse<usize, OrderError>,
    },
}
