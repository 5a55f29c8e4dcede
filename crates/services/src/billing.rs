//! Billing service trait and in-memory implementation.

use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use tokio::sync::Mutex;

use crate::error::{Result, ServiceError};

/// Charges customers for what they ordered.
#[async_trait]
pub trait BillingService: Send + Sync {
    /// Charges `customer_id` for `amount`.
    async fn bill(&self, customer_id: EntityId, amount: f64) -> Result<()>;
}

#[derive(Debug, Default)]
struct InMemoryBillingState {
    bills: Vec<(EntityId, f64)>,
    fail_on_bill: bool,
}

/// In-memory billing service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBillingService {
    state: Arc<Mutex<InMemoryBillingState>>,
}

impl InMemoryBillingService {
    /// Creates a billing service with no recorded bills.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to decline every following bill.
    pub async fn set_fail_on_bill(&self, fail: bool) {
        self.state.lock().await.fail_on_bill = fail;
    }

    /// Returns the number of recorded bills.
    pub async fn bill_count(&self) -> usize {
        self.state.lock().await.bills.len()
    }

    /// Sum of everything billed to `customer_id`.
    pub async fn total_billed(&self, customer_id: EntityId) -> f64 {
        self.state
            .lock()
            .await
            .bills
            .iter()
            .filter(|(id, _)| *id == customer_id)
            .map(|(_, amount)| amount)
            .sum()
    }
}

#[async_trait]
impl BillingService for InMemoryBillingService {
    async fn bill(&self, customer_id: EntityId, amount: f64) -> Result<()> {
        let mut state = self.state.lock().await;

        if state.fail_on_bill {
            return Err(ServiceError::Billing("bill declined".to_string()));
        }

        state.bills.push((customer_id, amount));
        Ok(())
    }
}
