mod domain;
mod clients;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actors;
mod error;
mod messages;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, OrderSystem, ServiceConfig};
use crate::domain::{CheckoutInput, OrderStore, PaymentMethod};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront order service");

    // Start the order system around the demo catalog
    let system = OrderSystem::with_store(ServiceConfig::default(), OrderStore::seeded());

    // Orders page: initial load
    let span = tracing::info_span!("orders_page_load");
    let orders = async {
        info!("Loading order list");
        system
            .order_client
            .list_orders()
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_count = orders.len(), "Order list loaded");

    // Checkout: pickup order paid in cash
    let span = tracing::info_span!("checkout_pickup");
    let order_result = async {
        info!("Submitting checkout form");
        system
            .order_client
            .create_order(CheckoutInput::pickup("Ana Ruiz", PaymentMethod::Efectivo))
            .await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(order_id = %order.id, status = %order.status, "Order placed"),
        Err(e) => error!(error = %e, "Order placement failed"),
    }

    // Checkout: delivery order paid with Yape
    let span = tracing::info_span!("checkout_delivery");
    let order = async {
        info!("Submitting checkout form");
        system
            .order_client
            .create_order(CheckoutInput::delivery(
                "Luis Torres",
                "Calle Las Begonias 250, Lima",
                PaymentMethod::Yape,
            ))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, address = ?order.address, "Order placed");

    // Orders page: refresh after checkout
    let orders = system
        .order_client
        .list_orders()
        .await
        .map_err(|e| e.to_string())?;
    info!(order_count = orders.len(), "Order list refreshed");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Storefront order service stopped");
    Ok(())
}
