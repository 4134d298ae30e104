//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Cart Store over per-visitor storage
//! - `events` - Cart change channel and activity logger
//! - `checkout` - Checkout submission
//! - `quick_view` - Quick view modal selection
//! - `theme` - Persisted light/dark preference

pub mod cart;
pub mod checkout;
pub mod events;
pub mod quick_view;
pub mod theme;

pub use cart::{CartError, CartStore};
pub use checkout::CheckoutOutcome;
pub use events::{CartChange, CartEvent, CartEvents};
pub use quick_view::QuickView;
