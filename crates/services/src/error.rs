//! Service error types.

use domain::AggregateError;
use repository::{BoxError, CustomerError, ProductError};
use thiserror::Error;

/// Errors that can occur while wiring or running a service.
///
/// Aggregate and repository errors pass through unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    /// The customer store could not be reached while building a service.
    #[error("failed to connect the customer repository: {0}")]
    Connection(#[source] BoxError),

    #[error("order service has no customer repository configured")]
    MissingCustomerRepository,

    #[error("order service has no product repository configured")]
    MissingProductRepository,

    #[error("tavern service has no order service configured")]
    MissingOrderService,

    /// The billing backend refused the charge.
    #[error("billing failed: {0}")]
    Billing(String),
}

/// Convenience type alias for service results.
pub type Result<T> = std::result::Result<T, ServiceError>;
