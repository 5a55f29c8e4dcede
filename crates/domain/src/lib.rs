//! Domain layer for the tavern.
//!
//! This crate provides the building blocks the rest of the workspace stores
//! and prices:
//! - Entities (`Person`, `Item`) distinguished by identity
//! - The `Transaction` value object
//! - The `Customer` and `Product` aggregates

pub mod customer;
pub mod entity;
pub mod error;
pub mod product;
pub mod value_objects;

pub use common::EntityId;
pub use customer::Customer;
pub use entity::{Item, Person};
pub use error::AggregateError;
pub use product::Product;
pub use value_objects::Transaction;
