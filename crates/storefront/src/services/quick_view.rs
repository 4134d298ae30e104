//! Quick view modal state.
//!
//! The selection is stored per visitor under [`keys::QUICK_VIEW`] so that a
//! confirm request knows which product the modal was showing.

use cottonfront_core::{Catalog, CatalogEntry, QuickViewSelection, Size};

use super::cart::{CartError, CartStore};
use crate::storage::{KeyValueStorage, StorageError, keys};

/// Quick view operations for one visitor.
pub struct QuickView<'a, S> {
    storage: &'a S,
    catalog: &'a Catalog,
}

impl<'a, S: KeyValueStorage> QuickView<'a, S> {
    pub const fn new(storage: &'a S, catalog: &'a Catalog) -> Self {
        Self { storage, catalog }
    }

    /// Current selection; unreadable state counts as closed.
    pub async fn selection(&self) -> QuickViewSelection {
        match self.storage.get_item(keys::QUICK_VIEW).await {
            Ok(Some(text)) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "discarding unreadable quick view state");
                QuickViewSelection::default()
            }),
            Ok(None) => QuickViewSelection::default(),
            Err(e) => {
                tracing::warn!(error = %e, "quick view storage unreadable");
                QuickViewSelection::default()
            }
        }
    }

    async fn save(&self, selection: &QuickViewSelection) -> Result<(), StorageError> {
        let text = serde_json::to_string(selection).map_err(|e| StorageError::NotText {
            key: keys::QUICK_VIEW.to_owned(),
            message: e.to_string(),
        })?;
        self.storage.set_item(keys::QUICK_VIEW, text).await
    }

    /// Open `key`. Unknown keys are ignored and return `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be stored.
    pub async fn open(&self, key: &str) -> Result<Option<&'a CatalogEntry>, StorageError> {
        let mut selection = self.selection().await;
        let Some(entry) = selection.open(self.catalog, key) else {
            return Ok(None);
        };
        self.save(&selection).await?;
        Ok(Some(entry))
    }

    /// Close the modal.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be stored.
    pub async fn close(&self) -> Result<(), StorageError> {
        let mut selection = self.selection().await;
        selection.close();
        self.save(&selection).await
    }

    /// Record the picked size. The size never affects what gets added.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be stored.
    pub async fn select_size(&self, size: Size) -> Result<QuickViewSelection, StorageError> {
        let mut selection = self.selection().await;
        selection.select_size(size);
        self.save(&selection).await?;
        Ok(selection)
    }

    /// Add the open product to the cart and close the modal.
    ///
    /// Returns `None` without touching the cart when nothing is open.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart or the selection cannot be stored.
    pub async fn confirm_add<C: KeyValueStorage>(
        &self,
        cart: &CartStore<C>,
    ) -> Result<Option<&'a CatalogEntry>, CartError> {
        let mut selection = self.selection().await;
        let Some(entry) = selection.confirm(self.catalog) else {
            return Ok(None);
        };

        cart.add_item(&entry.name, entry.price, Some(entry.image.clone()))
            .await?;
        self.save(&selection).await?;
        Ok(Some(entry))
    }
}
