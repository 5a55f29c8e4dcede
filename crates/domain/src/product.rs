//! Product aggregate.

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::entity::Item;
use crate::error::AggregateError;

/// Product aggregate root: a sellable `Item` with a price.
///
/// Immutable once created; repositories replace the whole aggregate on
/// update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    item: Item,
    price: f64,
}

impl Product {
    /// Creates a product with a freshly generated id.
    ///
    /// Fails with `MissingValues` when `name` is empty. The price is taken
    /// as given.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self, AggregateError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AggregateError::MissingValues);
        }

        Ok(Self {
            item: Item::new(EntityId::new(), name, description),
            price,
        })
    }

    /// Rebuilds a product around an already persisted item.
    ///
    /// No validation is applied. Used to replace a stored product under its
    /// existing id.
    pub fn from_item(item: Item, price: f64) -> Self {
        Self { item, price }
    }

    /// Returns the id of the owned item.
    pub fn id(&self) -> EntityId {
        self.item.id
    }

    /// Returns the unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns a read-only view of the owned item.
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.item.name
    }
}
