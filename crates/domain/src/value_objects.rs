//! Value objects for the tavern domain.

use chrono::{DateTime, Utc};
use common::EntityId;
use serde::{Deserialize, Serialize};

/// A payment between two parties.
///
/// Customers keep a ledger of these; nothing in the order workflow records
/// one yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub from: EntityId,
    pub to: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a transaction stamped with the current time.
    pub fn new(amount: f64, from: EntityId, to: EntityId) -> Self {
        Self {
            amount,
            from,
            to,
            created_at: Utc::now(),
        }
    }
}
