use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use domain::Customer;
use tokio::sync::RwLock;

use super::CustomerRepository;
use crate::error::CustomerError;

/// In-memory customer repository.
///
/// Mutations hold the write lock across both the existence check and the
/// change, reads hold the read lock, so every call is atomic with respect
/// to every other call on the same repository. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<EntityId, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored customers.
    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    /// Returns true when no customer is stored.
    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn get(&self, id: EntityId) -> Result<Customer, CustomerError> {
        let customers = self.customers.read().await;
        customers
            .get(&id)
            .cloned()
            .ok_or_else(|| CustomerError::not_found(id))
    }

    async fn add(&self, customer: Customer) -> Result<(), CustomerError> {
        let id = customer.id();
        let mut customers = self.customers.write().await;

        if customers.contains_key(&id) {
            return Err(CustomerError::failed_to_add(id));
        }

        customers.insert(id, customer);
        tracing::debug!(customer_id = %id, "customer added");
        Ok(())
    }

    async fn update(&self, customer: Customer) -> Result<(), CustomerError> {
        let id = customer.id();
        let mut customers = self.customers.write().await;

        match customers.get_mut(&id) {
            Some(stored) => {
                *stored = customer;
                tracing::debug!(customer_id = %id, "customer updated");
                Ok(())
            }
            None => Err(CustomerError::update(id)),
        }
    }

    async fn delete(&self, customer: &Customer) -> Result<(), CustomerError> {
        let id = customer.id();
        let mut customers = self.customers.write().await;

        if customers.remove(&id).is_none() {
            return Err(CustomerError::delete(id));
        }

        tracing::debug!(customer_id = %id, "customer deleted");
        Ok(())
    }
}
