//! Cotton Front Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! - Cart line items and the pure cart operations behind the Cart Store
//! - The static product catalog shown on the home page and in quick view
//! - Theme and quick-view selection state kept per visitor
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no HTTP. Persistence lives in the storefront crate behind
//! its `KeyValueStorage` trait.
//!
//! # Modules
//!
//! - [`types`] - Money, product keys, cart, catalog, theme and quick view

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
