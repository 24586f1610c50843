use thiserror::Error;

/// Failures the order service surfaces to its caller.
///
/// Both kinds are recoverable: the caller shows a generic message and
/// offers a manual retry. There is no idempotency key, so resubmitting
/// after a reported creation failure may create a duplicate order.
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    /// Listing could not complete. No state was mutated.
    #[error("order retrieval failed: {0}")]
    RetrievalFailed(String),
    /// Creation could not complete. No partial order is left behind.
    #[error("order creation failed: {0}")]
    CreationFailed(String),
}
