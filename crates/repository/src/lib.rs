//! Persistence for the tavern aggregates.
//!
//! Each aggregate gets a repository trait plus interchangeable backends:
//! - `CustomerRepository`: in-memory and MongoDB
//! - `ProductRepository`: in-memory
//!
//! Services depend only on the traits, so backends can be swapped at wiring
//! time.

pub mod customer;
pub mod error;
pub mod product;

pub use common::EntityId;
pub use customer::{
    CustomerRepository, InMemoryCustomerRepository,
    mongo::{CustomerDocument, MongoCustomerRepository},
};
pub use error::{BoxError, CustomerError, ProductError};
pub use product::{InMemoryProductRepository, ProductRepository};
