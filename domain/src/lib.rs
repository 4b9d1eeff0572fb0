//! Business operations of the todo platform.
//!
//! Handlers in `web` call into this crate only; it assigns identifiers and
//! timestamps, composes the item store and the attachment store, and
//! translates lower-layer errors into [`error::Error`].

// Re-exports from `entity` crate via `entity_api`
pub use entity_api::{todos, Id};

pub mod authorization;
pub mod error;
pub mod gateway;
pub mod todo;
