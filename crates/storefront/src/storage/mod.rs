//! Per-visitor key-value storage.
//!
//! The Cart Store, theme and quick view state all persist through the
//! [`KeyValueStorage`] trait: a small, text-valued get/set/remove interface
//! in the shape of browser local storage. Two implementations exist:
//!
//! - [`tower_sessions::Session`] - the visitor's cookie-identified session,
//!   used by every HTTP handler
//! - [`MemoryStorage`] - a standalone map for tests and tooling
//!
//! Values are opaque text. Callers own serialization so that a corrupted value
//! can be detected and recovered from by the caller rather than here.

mod memory;
mod session;

use std::future::Future;

use thiserror::Error;

pub use memory::MemoryStorage;

/// Storage keys shared by every `KeyValueStorage` user.
pub mod keys {
    /// Serialized cart line items.
    pub const CART_ITEMS: &str = "cf_cart_items";

    /// Selected colour theme (`light` or `dark`).
    pub const THEME: &str = "cf_theme";

    /// Open quick view product and picked size.
    pub const QUICK_VIEW: &str = "cf_quick_view";
}

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be reached or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value could not be decoded as text.
    #[error("stored value for {key} is not text: {message}")]
    NotText { key: String, message: String },
}

/// Text-valued key-value storage scoped to one visitor.
///
/// Every method may fail: storage can be disabled, full or unreachable.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Delete the value under `key`. Deleting a missing key succeeds.
    fn remove_item(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}
