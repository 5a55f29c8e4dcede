//! Application services of the tavern.
//!
//! - `OrderService` prices an order from a customer id and product ids
//! - `TavernService` is the facade that places orders and bills customers
//! - `BillingService` is the billing seam, with an in-memory implementation
//!
//! Services only see the repository traits; which backend sits behind them
//! is decided by the builders.

pub mod billing;
pub mod error;
pub mod order;
pub mod tavern;

pub use billing::{BillingService, InMemoryBillingService};
pub use error::{Result, ServiceError};
pub use order::{OrderService, OrderServiceBuilder};
pub use tavern::{TavernService, TavernServiceBuilder};
