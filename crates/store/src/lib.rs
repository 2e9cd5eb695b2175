//! Persistence collaborator for the product catalog.
//!
//! The API layer talks to storage only through the [`ProductStore`] trait,
//! so the backend can be swapped without touching any handler. The crate
//! ships [`MemoryStore`], an in-process reference implementation used by
//! the binary and by integration tests; a durable backend would implement
//! the same trait.

pub mod memory;
pub mod store;

pub use memory::MemoryStore;
pub use store::{ProductStore, StoreError};
