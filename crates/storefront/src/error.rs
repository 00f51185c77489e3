//! Unified error handling for the storefront core.
//!
//! Provides a single `StorefrontError` type aggregating the module-level
//! errors, for callers that route everything through one `Result`.
//! Malformed catalog data is deliberately *not* an error anywhere: it is
//! recovered field by field during normalization, and an absent entity is an
//! `Option::None`, never an `Err`.

use thiserror::Error;

use crate::cart::{CartError, ConfigureError};
use crate::config::ConfigError;
use crate::contact::ContactError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// A cart mutation could not be persisted.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A product could not be configured into a cart line.
    #[error("Configuration error: {0}")]
    Configure(#[from] ConfigureError),

    /// A contact submission failed validation.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found, for callers that want a hard lookup.
    #[error("Not found: {0}")]
    NotFound(String),
}
