//! The cart store: the authoritative in-session list of cart lines.

use optique_core::CartLineId;
use thiserror::Error;

use super::item::CartItem;
use super::storage::{CartStorage, StorageError};

/// Errors raised by cart mutations.
///
/// The original implementation swallowed persistence failures; here they are
/// surfaced so the caller can decide what to tell the shopper.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage backend rejected the persistence write.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The cart collection could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// An ordered collection of cart lines, unique by line id, persisted to a
/// [`CartStorage`] backend on every mutation.
///
/// The store owns its backend exclusively for the session; there is no
/// cross-tab merge policy.
#[derive(Debug)]
pub struct CartStore<S: CartStorage> {
    items: Vec<CartItem>,
    storage: S,
    key: String,
}

impl<S: CartStorage> CartStore<S> {
    /// Open the cart, hydrating from `storage` under `key`.
    ///
    /// Unreadable or unparseable persisted data is recovered to an empty
    /// cart with a warning; construction itself never fails.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let items = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(key, error = %e, "persisted cart is unparseable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "cart storage unreadable, starting empty");
                Vec::new()
            }
        };
        Self {
            items,
            storage,
            key,
        }
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add a line to the cart.
    ///
    /// When a line with the same id already exists its quantity is increased
    /// by the incoming quantity and its price is retained; otherwise the line
    /// is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] when the updated cart cannot be persisted.
    pub fn add(&mut self, item: CartItem) -> Result<(), CartError> {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
            tracing::debug!(line = %item.id, quantity = existing.quantity, "merged cart line");
        } else {
            tracing::debug!(line = %item.id, quantity = item.quantity, "added cart line");
            self.items.push(item);
        }
        self.persist()
    }

    /// Remove the line with the given id. Absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] when the updated cart cannot be persisted.
    pub fn remove(&mut self, id: &CartLineId) -> Result<(), CartError> {
        self.items.retain(|i| i.id != *id);
        self.persist()
    }

    /// Set the quantity of the line with the given id. A quantity of zero
    /// removes the line. Absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] when the updated cart cannot be persisted.
    pub fn update_quantity(&mut self, id: &CartLineId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(id);
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == *id) {
            item.quantity = quantity;
        }
        self.persist()
    }

    /// Empty the whole cart and drop the persisted entry.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] when the persisted entry cannot be removed.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.items.clear();
        self.storage.remove(&self.key)?;
        Ok(())
    }

    /// Sum of `price x quantity` across all lines; 0 when empty.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.items
            .iter()
            .map(|i| i.price * u64::from(i.quantity))
            .sum()
    }

    /// Sum of quantities across all lines; 0 when empty.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Serialize the collection and write it under the cart key.
    fn persist(&mut self) -> Result<(), CartError> {
        let serialized = serde_json::to_string(&self.items)?;
        self.storage.set(&self.key, &serialized)?;
        Ok(())
    }
}
