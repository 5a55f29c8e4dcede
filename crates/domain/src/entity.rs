//! Entities owned by the aggregates.

use common::EntityId;
use serde::{Deserialize, Serialize};

/// A person, owned exclusively by a `Customer`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Person {
    pub id: EntityId,
    pub name: String,
}

impl Person {
    /// Creates a person with the given id and name.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Something that can be sold, owned by a `Product`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub description: String,
}

impl Item {
    /// Creates an item with the given id, name and description.
    pub fn new(id: EntityId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
