//! Persistence boundary for the cart.
//!
//! The cart survives page reloads through a client-scoped key-value store
//! (the browser's local storage in the original deployment). The store is
//! abstracted behind [`CartStorage`] so the cart logic can be exercised
//! against an in-memory backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend rejected a write (quota, permissions, ...).
    #[error("storage write failed: {0}")]
    WriteFailed(String),
    /// The backend could not serve a read.
    #[error("storage read failed: {0}")]
    ReadFailed(String),
}

/// A synchronous, client-scoped key-value store.
///
/// Keys and values are plain strings; the cart serializes itself to JSON
/// before handing it over.
pub trait CartStorage {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ReadFailed`] when the backend cannot serve
    /// the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::WriteFailed`] when the backend rejects the
    /// write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::WriteFailed`] when the backend rejects the
    /// removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage backend.
///
/// Clones share the same underlying map, the way every script on a page
/// shares one local storage, so a cart reopened from a clone sees what the
/// previous cart wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one entry, for hydration tests.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        storage
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CartStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries().remove(key);
        Ok(())
    }
}
