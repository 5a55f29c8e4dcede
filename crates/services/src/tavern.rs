//! Tavern facade over ordering and billing.

use std::sync::Arc;

use common::EntityId;

use crate::billing::BillingService;
use crate::error::{Result, ServiceError};
use crate::order::OrderService;

/// Entry point for placing orders at the tavern.
///
/// Billing is optional. Without a billing backend a successful order only
/// logs the amount the customer should be billed.
pub struct TavernService {
    orders: Arc<OrderService>,
    billing: Option<Arc<dyn BillingService>>,
}

impl TavernService {
    /// Starts wiring a tavern service.
    pub fn builder() -> TavernServiceBuilder {
        TavernServiceBuilder::default()
    }

    /// Returns the order service orders are priced with.
    pub fn order_service(&self) -> &OrderService {
        &self.orders
    }

    /// Prices the order and bills the customer for it.
    #[tracing::instrument(skip(self, product_ids), fields(products = product_ids.len()))]
    pub async fn order(&self, customer_id: EntityId, product_ids: &[EntityId]) -> Result<()> {
        let total = self.orders.create_order(customer_id, product_ids).await?;

        tracing::info!("Bill the customer: {total:.2}");
        if let Some(billing) = &self.billing {
            billing.bill(customer_id, total).await?;
            metrics::counter!("tavern_bills_total").increment(1);
        }

        Ok(())
    }
}

/// Wiring for a [`TavernService`].
#[derive(Default)]
pub struct TavernServiceBuilder {
    orders: Option<Arc<OrderService>>,
    billing: Option<Arc<dyn BillingService>>,
}

impl TavernServiceBuilder {
    /// Uses `orders` for pricing. Accepts an owned or shared service.
    pub fn order_service(mut self, orders: impl Into<Arc<OrderService>>) -> Self {
        self.orders = Some(orders.into());
        self
    }

    /// Bills customers through `billing` after every successful order.
    pub fn billing_service(mut self, billing: impl BillingService + 'static) -> Self {
        self.billing = Some(Arc::new(billing));
        self
    }

    /// Fails with `MissingOrderService` when no order service was given.
    pub fn build(self) -> Result<TavernService> {
        Ok(TavernService {
            orders: self.orders.ok_or(ServiceError::MissingOrderService)?,
            billing: self.billing,
        })
    }
}
