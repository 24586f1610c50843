use tracing::{error, info, instrument};

use crate::actors::OrderService;
use crate::app_system::ServiceConfig;
use crate::clients::OrderClient;
use crate::domain::OrderStore;

/// Owns the running order service and hands out its client.
///
/// Responsible for starting the actor, wiring the client, and handling
/// shutdown.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handle: tokio::task::JoinHandle<()>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderSystem {
    /// Empty store, default mock latencies.
    pub fn new() -> Self {
        Self::with_store(ServiceConfig::default(), OrderStore::new())
    }

    #[allow(dead_code)]
    pub fn with_config(config: ServiceConfig) -> Self {
        Self::with_store(config, OrderStore::new())
    }

    /// Start the service around an injected store.
    #[instrument(name = "order_system", skip(config, store))]
    pub fn with_store(config: ServiceConfig, store: OrderStore) -> Self {
        info!("Starting order system");

        let (service, order_client) = OrderService::with_store(config, store);
        let handle = tokio::spawn(service.run());

        info!("Order system started successfully");

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shut down: ask the actor to stop, then wait for it.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        let _ = self.order_client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Service task failed: {:?}", e));
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
