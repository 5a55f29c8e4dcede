//! Aggregate validation errors.

use thiserror::Error;

/// Errors raised while constructing an aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// A customer needs a non-empty name.
    #[error("a customer has to have a valid name")]
    InvalidPerson,

    /// A product needs a non-empty name.
    #[error("missing values")]
    MissingValues,
}
