//! Customer aggregate.

use common::EntityId;
use serde::{Deserialize, Serialize};

use crate::entity::{Item, Person};
use crate::error::AggregateError;
use crate::value_objects::Transaction;

/// Customer aggregate root.
///
/// The root entity is the owned `Person`; its id is the customer's id.
/// A customer always has a person, so every accessor is a plain read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    person: Person,

    /// Items the customer owns.
    products: Vec<Item>,

    transactions: Vec<Transaction>,
}

impl Customer {
    /// Creates a customer with a freshly generated id.
    ///
    /// Fails with `InvalidPerson` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, AggregateError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AggregateError::InvalidPerson);
        }

        Ok(Self::from_person(Person::new(EntityId::new(), name)))
    }

    /// Rebuilds a customer around an already persisted person.
    ///
    /// No validation is applied; storage backends use this when translating
    /// their records back into aggregates.
    pub fn from_person(person: Person) -> Self {
        Self {
            person,
            products: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Returns the id of the owned person.
    pub fn id(&self) -> EntityId {
        self.person.id
    }

    /// Replaces the id of the owned person.
    pub fn set_id(&mut self, id: EntityId) {
        self.person.id = id;
    }

    /// Returns the customer's name.
    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// Replaces the customer's name. No validation is applied.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.person.name = name.into();
    }

    /// Returns a read-only view of the owned person.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Returns the items the customer owns.
    pub fn products(&self) -> &[Item] {
        &self.products
    }

    /// Returns the customer's transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Appends a transaction to the customer's ledger.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}
