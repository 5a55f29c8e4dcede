//! Order service: prices an order against the customer and product
//! repositories.

use std::sync::Arc;

use common::EntityId;
use domain::{Customer, Product};
use repository::{
    CustomerRepository, InMemoryCustomerRepository, InMemoryProductRepository,
    MongoCustomerRepository, ProductRepository,
};

use crate::error::{Result, ServiceError};

/// Service for pricing orders.
///
/// Holds shared handles to one customer and one product repository. Build
/// it with [`OrderService::builder`].
#[derive(Clone)]
pub struct OrderService {
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
}

impl OrderService {
    /// Starts wiring an order service.
    pub fn builder() -> OrderServiceBuilder {
        OrderServiceBuilder::default()
    }

    /// Returns the customer repository orders are checked against.
    pub fn customer_repository(&self) -> &Arc<dyn CustomerRepository> {
        &self.customers
    }

    /// Returns the product repository prices come from.
    pub fn product_repository(&self) -> &Arc<dyn ProductRepository> {
        &self.products
    }

    /// Registers a new customer and returns their id.
    #[tracing::instrument(skip(self))]
    pub async fn add_customer(&self, name: &str) -> Result<EntityId> {
        let customer = Customer::new(name)?;
        let id = customer.id();
        self.customers.add(customer).await?;
        Ok(id)
    }

    /// Computes the total price of `product_ids` for `customer_id`.
    ///
    /// The customer is looked up first; products are then fetched in the
    /// given order and their prices summed in that order. The first missing
    /// customer or product aborts the order with the repository's error.
    #[tracing::instrument(skip(self, product_ids), fields(products = product_ids.len()))]
    pub async fn create_order(&self, customer_id: EntityId, product_ids: &[EntityId]) -> Result<f64> {
        match self.price_order(customer_id, product_ids).await {
            Ok(total) => {
                metrics::counter!("orders_created_total").increment(1);
                metrics::histogram!("order_total_amount").record(total);
                Ok(total)
            }
            Err(e) => {
                metrics::counter!("orders_failed_total").increment(1);
                tracing::warn!(error = %e, "order rejected");
                Err(e)
            }
        }
    }

    async fn price_order(&self, customer_id: EntityId, product_ids: &[EntityId]) -> Result<f64> {
        let customer = self.customers.get(customer_id).await?;

        let mut products: Vec<Product> = Vec::with_capacity(product_ids.len());
        let mut total = 0.0;
        for &id in product_ids {
            let product = self.products.get_by_id(id).await?;
            total += product.price();
            products.push(product);
        }

        tracing::info!(
            "Customer: {} has ordered {} products with total of ${:.2}",
            customer.id(),
            products.len(),
            total
        );
        for product in &products {
            tracing::info!("\t - {}", product.name());
        }

        Ok(total)
    }
}

/// Step-by-step wiring for an [`OrderService`].
///
/// Steps apply in call order; a later step for the same repository replaces
/// the earlier one. Fallible steps abort construction with their error.
#[derive(Default)]
pub struct OrderServiceBuilder {
    customers: Option<Arc<dyn CustomerRepository>>,
    products: Option<Arc<dyn ProductRepository>>,
}

impl OrderServiceBuilder {
    /// Uses `repository` for customers.
    pub fn customer_repository(self, repository: impl CustomerRepository + 'static) -> Self {
        self.shared_customer_repository(Arc::new(repository))
    }

    /// Uses an already shared customer repository.
    pub fn shared_customer_repository(mut self, repository: Arc<dyn CustomerRepository>) -> Self {
        self.customers = Some(repository);
        self
    }

    /// Uses a fresh, empty in-memory customer repository.
    pub fn memory_customer_repository(self) -> Self {
        self.customer_repository(InMemoryCustomerRepository::new())
    }

    /// Connects to MongoDB and uses it for customers.
    pub async fn mongo_customer_repository(self, connection_string: &str) -> Result<Self> {
        let repository = MongoCustomerRepository::connect(connection_string)
            .await
            .map_err(|e| ServiceError::Connection(Box::new(e)))?;
        Ok(self.customer_repository(repository))
    }

    /// Uses `repository` for products.
    pub fn product_repository(mut self, repository: impl ProductRepository + 'static) -> Self {
        self.products = Some(Arc::new(repository));
        self
    }

    /// Uses a fresh in-memory product repository seeded with `products`.
    pub async fn memory_product_repository(
        self,
        products: impl IntoIterator<Item = Product>,
    ) -> Result<Self> {
        let repository = InMemoryProductRepository::with_products(products).await?;
        Ok(self.product_repository(repository))
    }

    /// Fails when either repository was never configured.
    pub fn build(self) -> Result<OrderService> {
        Ok(OrderService {
            customers: self
                .customers
                .ok_or(ServiceError::MissingCustomerRepository)?,
            products: self.products.ok_or(ServiceError::MissingProductRepository)?,
        })
    }
}
