//! Types shared by every layer of the tavern workspace.

pub mod types;

pub use types::EntityId;
