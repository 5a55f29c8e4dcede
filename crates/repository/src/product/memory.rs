use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use domain::Product;
use tokio::sync::RwLock;

use super::ProductRepository;
use crate::error::ProductError;

/// In-memory product repository.
///
/// Same locking discipline as the in-memory customer repository: the write
/// lock covers the whole check-and-mutate region of each call.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<EntityId, Product>>>,
}

impl InMemoryProductRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `products`.
    ///
    /// Fails on the first product whose id is already present.
    pub async fn with_products(
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self, ProductError> {
        let repo = Self::new();
        for product in products {
            repo.add(product).await?;
        }
        Ok(repo)
    }

    /// Returns the number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Returns true when no product is stored.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    /// Products come back sorted by id so results are reproducible.
    async fn get_all(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.products.read().await;
        let mut all: Vec<_> = products.values().cloned().collect();
        all.sort_by_key(Product::id);
        Ok(all)
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Product, ProductError> {
        let products = self.products.read().await;
        products
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    async fn add(&self, product: Product) -> Result<(), ProductError> {
        let id = product.id();
        let mut products = self.products.write().await;

        if products.contains_key(&id) {
            return Err(ProductError::FailedToAdd(id));
        }

        products.insert(id, product);
        tracing::debug!(product_id = %id, "product added");
        Ok(())
    }

    async fn update(&self, product: Product) -> Result<(), ProductError> {
        let id = product.id();
        let mut products = self.products.write().await;

        match products.get_mut(&id) {
            Some(stored) => {
                *stored = product;
                tracing::debug!(product_id = %id, "product updated");
                Ok(())
            }
            None => Err(ProductError::Update(id)),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<(), ProductError> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_none() {
            return Err(ProductError::Delete(id));
        }

        tracing::debug!(product_id = %id, "product deleted");
        Ok(())
    }
}
