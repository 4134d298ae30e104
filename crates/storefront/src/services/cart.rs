//! Cart Store: the only writer of persisted cart state.
//!
//! The cart lives as JSON text under [`keys::CART_ITEMS`] in the visitor's
//! [`KeyValueStorage`]. Every mutation is a read-modify-write that ends in a
//! single commit path: serialize the whole cart, persist it, then publish a
//! [`CartEvent`]. Nothing else serializes or stores cart text.
//!
//! Reads never fail: missing, corrupted or unreachable storage reads as an
//! empty cart. Callers that need to tell those cases apart use
//! [`CartStore::load`].

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use cottonfront_core::{Cart, MinorUnits};
use thiserror::Error;
use tower_sessions::Session;

use super::events::{CartChange, CartEvent, CartEvents};
use crate::state::AppState;
use crate::storage::{KeyValueStorage, StorageError, keys};

/// Errors from the Cart Store.
#[derive(Debug, Error)]
pub enum CartError {
    /// Storage could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Stored cart text is not a valid line item list.
    #[error("corrupted cart data: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// Cart operations over one visitor's storage.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
    events: CartEvents,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Create a store over `storage` publishing to `events`.
    pub const fn new(storage: S, events: CartEvents) -> Self {
        Self { storage, events }
    }

    /// The underlying storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// The channel mutations are published on.
    pub const fn events(&self) -> &CartEvents {
        &self.events
    }

    /// Read the cart, reporting why it could not be read.
    ///
    /// A missing key is not an error and yields an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if storage is unreachable and
    /// `CartError::Corrupted` if the stored text does not parse.
    pub async fn load(&self) -> Result<Cart, CartError> {
        match self.storage.get_item(keys::CART_ITEMS).await? {
            Some(text) => Ok(Cart::from_json(&text)?),
            None => Ok(Cart::new()),
        }
    }

    /// Read the cart, treating any failure as an empty cart.
    pub async fn read(&self) -> Cart {
        self.load().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable cart, starting empty");
            Cart::new()
        })
    }

    /// Replace the persisted cart with `cart`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn write(&self, cart: &Cart) -> Result<(), CartError> {
        self.commit(cart, CartChange::Replaced).await
    }

    async fn commit(&self, cart: &Cart, change: CartChange) -> Result<(), CartError> {
        let text = cart.to_json()?;
        self.storage.set_item(keys::CART_ITEMS, text).await?;

        tracing::debug!(?change, lines = cart.len(), "cart committed");
        self.events.publish(CartEvent {
            change,
            item_count: cart.item_count(),
            total: cart.total(),
        });
        Ok(())
    }

    /// Add one unit of `name`, merging with an existing line of the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn add_item(
        &self,
        name: &str,
        price: MinorUnits,
        image: Option<String>,
    ) -> Result<Cart, CartError> {
        let mut cart = self.read().await;
        let quantity = cart.add(name, price, image);
        self.commit(
            &cart,
            CartChange::Added {
                name: name.to_owned(),
                quantity,
            },
        )
        .await?;
        Ok(cart)
    }

    /// Remove the line named `name`. Unknown names leave storage untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn remove_item(&self, name: &str) -> Result<Cart, CartError> {
        let mut cart = self.read().await;
        if cart.remove(name) {
            self.commit(
                &cart,
                CartChange::Removed {
                    name: name.to_owned(),
                },
            )
            .await?;
        }
        Ok(cart)
    }

    /// Add `delta` to the quantity of `name`, never going below 1.
    ///
    /// Unknown names leave storage untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn change_quantity(&self, name: &str, delta: i64) -> Result<Cart, CartError> {
        let mut cart = self.read().await;
        if let Some(quantity) = cart.change_quantity(name, delta) {
            self.commit(
                &cart,
                CartChange::QuantityChanged {
                    name: name.to_owned(),
                    quantity,
                },
            )
            .await?;
        }
        Ok(cart)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be persisted.
    pub async fn clear(&self) -> Result<Cart, CartError> {
        self.reset(CartChange::Cleared).await
    }

    /// Empty the cart after a placed order.
    pub(crate) async fn complete_checkout(&self) -> Result<Cart, CartError> {
        self.reset(CartChange::CheckedOut).await
    }

    async fn reset(&self, change: CartChange) -> Result<Cart, CartError> {
        let cart = Cart::new();
        self.commit(&cart, change).await?;
        Ok(cart)
    }

    /// Total price of `items`, or of the stored cart when `None`.
    pub async fn total(&self, items: Option<&Cart>) -> MinorUnits {
        match items {
            Some(cart) => cart.total(),
            None => self.read().await.total(),
        }
    }

    /// Total quantity of `items`, or of the stored cart when `None`.
    pub async fn item_count(&self, items: Option<&Cart>) -> u32 {
        match items {
            Some(cart) => cart.item_count(),
            None => self.read().await.item_count(),
        }
    }
}

/// Extracts a session-backed Cart Store publishing to the app's cart events.
impl FromRequestParts<AppState> for CartStore<Session> {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = parts.extensions.get::<Session>().cloned().ok_or_else(|| {
            tracing::error!("session not found in request extensions - is SessionManagerLayer installed?");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        })?;

        Ok(Self::new(session, state.cart_events().clone()))
    }
}
