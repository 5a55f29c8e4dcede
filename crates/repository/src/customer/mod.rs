//! Customer repository trait and backends.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use common::EntityId;
use domain::Customer;

use crate::error::CustomerError;

pub use memory::InMemoryCustomerRepository;

/// Storage for `Customer` aggregates.
///
/// Customers cross this boundary by value: `get` hands out a copy, so
/// callers never share mutable state with the store.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fetches the customer stored under `id`.
    async fn get(&self, id: EntityId) -> Result<Customer, CustomerError>;

    /// Stores a new customer. Fails with `FailedToAdd` if the id is taken.
    async fn add(&self, customer: Customer) -> Result<(), CustomerError>;

    /// Replaces a stored customer. Fails with `Update` if it was never added.
    async fn update(&self, customer: Customer) -> Result<(), CustomerError>;

    /// Removes a stored customer. Fails with `Delete` if it was never added.
    async fn delete(&self, customer: &Customer) -> Result<(), CustomerError>;
}
