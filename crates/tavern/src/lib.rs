//! Wiring for the tavern host.
//!
//! Builds the order and tavern services from a [`Config`], seeds the menu,
//! registers the configured customer and places one order for them.

pub mod config;

use domain::Product;
use services::{OrderService, Result, TavernService};

pub use config::Config;

/// The products served by the tavern.
pub fn menu() -> std::result::Result<Vec<Product>, domain::AggregateError> {
    Ok(vec![
        Product::new("Beer", "Healthy Beverage", 1.99)?,
        Product::new("Peenuts", "Healthy Snacks", 0.99)?,
        Product::new("Wine", "Healthy Snacks", 0.99)?,
    ])
}

/// Builds a tavern service according to `config`, with `products` on the menu.
pub async fn build_tavern(config: &Config, products: Vec<Product>) -> Result<TavernService> {
    let builder = OrderService::builder()
        .memory_product_repository(products)
        .await?;

    let builder = match &config.mongo_uri {
        Some(uri) => builder.mongo_customer_repository(uri).await?,
        None => builder.memory_customer_repository(),
    };

    TavernService::builder()
        .order_service(builder.build()?)
        .build()
}

/// Registers the configured customer and orders the first and last items on
/// the menu for them.
pub async fn run(config: &Config) -> Result<()> {
    let products = menu()?;
    let order: Vec<_> = products
        .first()
        .into_iter()
        .chain(products.last())
        .map(Product::id)
        .collect();

    let tavern = build_tavern(config, products).await?;
    let customer_id = tavern
        .order_service()
        .add_customer(&config.customer_name)
        .await?;
    tracing::info!(%customer_id, name = %config.customer_name, "customer registered");

    tavern.order(customer_id, &order).await
}

#[cfg(test)]
mod tests {
    use services::ServiceError;

    use super::*;

    #[tokio::test]
    async fn test_run_with_in_memory_customers() {
        run(&Config::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_run_rejects_empty_customer_name() {
        let config = Config {
            customer_name: String::new(),
            ..Config::default()
        };

        let result = run(&config).await;
        assert!(matches!(result, Err(ServiceError::Aggregate(_))));
    }

    #[tokio::test]
    async fn test_built_tavern_prices_menu_items() {
        let products = menu().unwrap();
        let ids: Vec<_> = products.iter().map(Product::id).collect();
        let tavern = build_tavern(&Config::default(), products).await.unwrap();
        let customer_id = tavern.order_service().add_customer("Percy").await.unwrap();

        let total = tavern
            .order_service()
            .create_order(customer_id, &ids)
            .await
            .unwrap();
        assert_eq!(total, 1.99 + 0.99 + 0.99);
    }
}
