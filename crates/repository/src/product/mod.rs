//! Product repository trait and backends.

pub mod memory;

use async_trait::async_trait;
use common::EntityId;
use domain::Product;

use crate::error::ProductError;

pub use memory::InMemoryProductRepository;

/// Storage for `Product` aggregates.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every stored product.
    async fn get_all(&self) -> Result<Vec<Product>, ProductError>;

    /// Fetches the product stored under `id`.
    async fn get_by_id(&self, id: EntityId) -> Result<Product, ProductError>;

    /// Stores a new product. Fails with `FailedToAdd` if the id is taken.
    async fn add(&self, product: Product) -> Result<(), ProductError>;

    /// Replaces a stored product. Fails with `Update` if it was never added.
    async fn update(&self, product: Product) -> Result<(), ProductError>;

    /// Removes the product stored under `id`. Fails with `Delete` if absent.
    async fn delete(&self, id: EntityId) -> Result<(), ProductError>;
}
