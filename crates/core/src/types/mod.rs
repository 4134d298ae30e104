//! Core types for Cotton Front.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod money;
pub mod quick_view;
pub mod theme;

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, CatalogEntry};
pub use id::*;
pub use money::{CURRENCY_PREFIX, MinorUnits};
pub use quick_view::{QuickViewSelection, Size, SizeError};
pub use theme::{Theme, ThemeError};
