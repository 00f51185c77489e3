//! Optique Storefront library.
//!
//! This crate provides the storefront core as a library, allowing it to be
//! tested and reused by whatever presentation layer sits on top of it:
//!
//! - [`catalog`] - Normalization and querying of the static product catalog
//! - [`cart`] - The persisted client-scoped shopping cart
//! - [`contact`] - Contact form validation
//! - [`config`] - Environment-driven settings
//! - [`error`] - Unified error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
