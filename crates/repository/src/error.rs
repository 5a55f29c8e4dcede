//! Repository error types.
//!
//! Every operation fails with one variant per failure kind, so callers
//! match on the variant instead of on message text.

use common::EntityId;
use thiserror::Error;

/// Underlying storage failure attached to a repository error.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by a `CustomerRepository`.
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("customer not found in repository: {id}")]
    NotFound {
        id: EntityId,
        source: Option<BoxError>,
    },

    /// Adding an id that is already stored, or a backend insert failure.
    #[error("failed to add the customer: {id}")]
    FailedToAdd {
        id: EntityId,
        source: Option<BoxError>,
    },

    #[error("failed to update the customer: {id}")]
    Update {
        id: EntityId,
        source: Option<BoxError>,
    },

    #[error("failed to delete the customer: {id}")]
    Delete {
        id: EntityId,
        source: Option<BoxError>,
    },
}

impl CustomerError {
    /// `NotFound` without a backend source.
    pub fn not_found(id: EntityId) -> Self {
        Self::NotFound { id, source: None }
    }

    /// `FailedToAdd` without a backend source.
    pub fn failed_to_add(id: EntityId) -> Self {
        Self::FailedToAdd { id, source: None }
    }

    /// `Update` without a backend source.
    pub fn update(id: EntityId) -> Self {
        Self::Update { id, source: None }
    }

    /// `Delete` without a backend source.
    pub fn delete(id: EntityId) -> Self {
        Self::Delete { id, source: None }
    }

    /// The customer id the failed operation was about.
    pub fn id(&self) -> EntityId {
        match self {
            Self::NotFound { id, .. }
            | Self::FailedToAdd { id, .. }
            | Self::Update { id, .. }
            | Self::Delete { id, .. } => *id,
        }
    }
}

/// Errors returned by a `ProductRepository`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    #[error("product not found in repository: {0}")]
    NotFound(EntityId),

    #[error("failed to add the product: {0}")]
    FailedToAdd(EntityId),

    #[error("failed to update the product: {0}")]
    Update(EntityId),

    #[error("failed to delete the product: {0}")]
    Delete(EntityId),
}
