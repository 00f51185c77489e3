//! Optique Core - Shared types library.
//!
//! This crate provides common types used across all Optique components:
//! - `storefront` - Catalog and cart logic for the public-facing site
//! - `integration-tests` - Cross-module pipeline tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and validated emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
