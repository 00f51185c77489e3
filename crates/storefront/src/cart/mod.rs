//! The client-scoped shopping cart.
//!
//! A cart is an ordered collection of [`CartItem`] lines keyed by a composite
//! id (product plus selected configuration), persisted through a
//! [`CartStorage`] backend on every mutation. The store is an explicit object
//! owned by the application root, not an ambient singleton.

pub mod item;
pub mod storage;
pub mod store;

pub use item::{CartItem, ConfigureError};
pub use storage::{CartStorage, MemoryStorage, StorageError};
pub use store::{CartError, CartStore};
