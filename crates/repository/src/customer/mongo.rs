//! MongoDB-backed customer repository.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use bson::{Uuid as BsonUuid, doc};
use common::EntityId;
use domain::{Customer, Person};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::CustomerRepository;
use crate::error::{BoxError, CustomerError};

/// Database holding the tavern collections.
pub const DATABASE_NAME: &str = "tavern";

/// Collection holding one document per customer.
pub const COLLECTION_NAME: &str = "customers";

/// Upper bound on every round trip to the server.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Stored shape of a customer: `{ id: <BSON UUID>, name }`.
///
/// Only the person is persisted; owned items and transactions are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDocument {
    pub id: BsonUuid,
    pub name: String,
}

impl From<&Customer> for CustomerDocument {
    fn from(customer: &Customer) -> Self {
        Self {
            id: to_bson_uuid(customer.id()),
            name: customer.name().to_string(),
        }
    }
}

impl From<CustomerDocument> for Customer {
    fn from(document: CustomerDocument) -> Self {
        let id = EntityId::from_uuid(document.id.to_uuid_1());
        Customer::from_person(Person::new(id, document.name))
    }
}

fn to_bson_uuid(id: EntityId) -> BsonUuid {
    BsonUuid::from_uuid_1(id.as_uuid())
}

/// Runs one driver operation under `OPERATION_TIMEOUT`.
///
/// On timeout the pending operation is dropped before returning.
async fn bounded<T, F>(operation: F) -> Result<T, BoxError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(OPERATION_TIMEOUT, operation.into_future()).await {
        Ok(result) => result.map_err(Into::into),
        Err(elapsed) => Err(Box::new(elapsed)),
    }
}

/// Customer repository persisting to a MongoDB collection.
#[derive(Debug, Clone)]
pub struct MongoCustomerRepository {
    customers: Collection<CustomerDocument>,
}

impl MongoCustomerRepository {
    /// Connects using `connection_string`, binds to the customers
    /// collection and makes sure the unique index on `id` exists.
    pub async fn connect(connection_string: &str) -> mongodb::error::Result<Self> {
        let client = Client::with_uri_str(connection_string).await?;
        let repository = Self::new(&client);
        repository.ensure_indexes().await?;
        tracing::info!(
            database = DATABASE_NAME,
            collection = COLLECTION_NAME,
            "connected to MongoDB"
        );
        Ok(repository)
    }

    /// Binds to the customers collection of an existing client.
    ///
    /// Does not touch the server; call [`ensure_indexes`](Self::ensure_indexes)
    /// before relying on duplicate ids being rejected.
    pub fn new(client: &Client) -> Self {
        let customers = client
            .database(DATABASE_NAME)
            .collection::<CustomerDocument>(COLLECTION_NAME);
        Self { customers }
    }

    /// Creates the unique index on `id` that makes a second `add` of the
    /// same customer fail. Idempotent.
    pub async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.customers.create_index(index).await?;
        Ok(())
    }

    /// Gets a reference to the underlying collection.
    pub fn collection(&self) -> &Collection<CustomerDocument> {
        &self.customers
    }
}

#[async_trait]
impl CustomerRepository for MongoCustomerRepository {
    async fn get(&self, id: EntityId) -> Result<Customer, CustomerError> {
        let found = bounded(self.customers.find_one(doc! { "id": to_bson_uuid(id) }))
            .await
            .map_err(|source| {
                tracing::warn!(customer_id = %id, error = %source, "customer lookup failed");
                CustomerError::NotFound {
                    id,
                    source: Some(source),
                }
            })?;

        found
            .map(Customer::from)
            .ok_or_else(|| CustomerError::not_found(id))
    }

    async fn add(&self, customer: Customer) -> Result<(), CustomerError> {
        let id = customer.id();
        let document = CustomerDocument::from(&customer);

        bounded(self.customers.insert_one(document))
            .await
            .map_err(|source| {
                tracing::warn!(customer_id = %id, error = %source, "customer insert failed");
                CustomerError::FailedToAdd {
                    id,
                    source: Some(source),
                }
            })?;

        tracing::debug!(customer_id = %id, "customer added");
        Ok(())
    }

    async fn update(&self, customer: Customer) -> Result<(), CustomerError> {
        let id = customer.id();
        let filter = doc! { "id": to_bson_uuid(id) };
        let update = doc! { "$set": { "name": customer.name() } };

        let result = bounded(self.customers.update_one(filter, update))
            .await
            .map_err(|source| {
                tracing::warn!(customer_id = %id, error = %source, "customer update failed");
                CustomerError::Update {
                    id,
                    source: Some(source),
                }
            })?;

        if result.matched_count == 0 {
            return Err(CustomerError::update(id));
        }

        tracing::debug!(customer_id = %id, "customer updated");
        Ok(())
    }

    async fn delete(&self, customer: &Customer) -> Result<(), CustomerError> {
        let id = customer.id();

        let result = bounded(self.customers.delete_one(doc! { "id": to_bson_uuid(id) }))
            .await
            .map_err(|source| {
                tracing::warn!(customer_id = %id, error = %source, "customer delete failed");
                CustomerError::Delete {
                    id,
                    source: Some(source),
                }
            })?;

        if result.deleted_count == 0 {
            return Err(CustomerError::delete(id));
        }

        tracing::debug!(customer_id = %id, "customer deleted");
        Ok(())
    }
}
