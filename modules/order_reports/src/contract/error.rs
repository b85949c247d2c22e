//! Contract error types for order operations
//!
//! Provider failures surface inline to the operator; there is no automatic
//! retry.

use thiserror::Error;

/// Failures from the orders provider
#[derive(Debug, Error)]
pub enum OrderError {
    /// The referenced order does not exist
    #[error("order not found: {id}")]
    NotFound { id: String },

    /// The provider could not be reached or rejected the request
    #[error("order provider unavailable: {reason}")]
    Unavailable { reason: String },

    /// Secure document delivery failed
    #[error("document delivery failed: {reason}")]
    Delivery { reason: String },
}
