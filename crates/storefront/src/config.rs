//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STOREFRONT_CART_STORAGE_KEY` - Storage key the cart persists under
//!   (default: cart)
//! - `STOREFRONT_PAGE_SIZE` - Products per listing page (default: 12)
//! - `STOREFRONT_FEATURED_LIMIT` - Products on the home page strip
//!   (default: 6)

use thiserror::Error;

const DEFAULT_CART_STORAGE_KEY: &str = "cart";
const DEFAULT_PAGE_SIZE: usize = 12;
const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Storage key the cart persists under.
    pub cart_storage_key: String,
    /// Products per listing page.
    pub page_size: usize,
    /// Products on the home page strip.
    pub featured_limit: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_storage_key: DEFAULT_CART_STORAGE_KEY.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            featured_limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables, with defaults for
    /// anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a numeric variable is set
    /// to something unparseable or zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            cart_storage_key: std::env::var("STOREFRONT_CART_STORAGE_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CART_STORAGE_KEY.to_owned()),
            page_size: positive_var("STOREFRONT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            featured_limit: positive_var("STOREFRONT_FEATURED_LIMIT", DEFAULT_FEATURED_LIMIT)?,
        })
    }
}

fn positive_var(name: &str, default: usize) -> Result<usize, ConfigError> {
    let Ok(raw) = std::env::var(name) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(v) if v > 0 => Ok(v),
        Ok(_) => Err(ConfigError::InvalidEnvVar(
            name.to_owned(),
            "must be positive".to_owned(),
        )),
        Err(e) => Err(ConfigError::InvalidEnvVar(name.to_owned(), e.to_string())),
    }
}
