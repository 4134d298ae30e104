//! Quick view modal selection.
//!
//! Tracks which catalog entry a visitor has open in the quick view modal and
//! the size they picked. The size is recorded for display only: no cart
//! operation reads it.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CatalogEntry};
use super::id::ProductKey;

/// Error parsing a [`Size`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown size: {0:?}")]
pub struct SizeError(pub String);

/// Garment size offered in the quick view picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    #[default]
    M,
    L,
    Xl,
}

impl Size {
    /// Every size in picker order.
    pub const ALL: [Self; 5] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    /// Parse a size label such as `"M"` or `"xl"`.
    ///
    /// # Errors
    ///
    /// Returns `SizeError` for labels outside [`Size::ALL`].
    pub fn parse(s: &str) -> Result<Self, SizeError> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SizeError(s.to_owned()))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-visitor quick view state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuickViewSelection {
    /// Product currently shown, if the modal is open.
    pub current: Option<ProductKey>,
    /// Picked size, reset to the default on every open.
    #[serde(default)]
    pub size: Size,
}

impl QuickViewSelection {
    /// Whether the modal is showing a product.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Open `key` if the catalog has it. Unknown keys leave the state untouched.
    pub fn open<'a>(&mut self, catalog: &'a Catalog, key: &str) -> Option<&'a CatalogEntry> {
        let entry = catalog.get(key)?;
        self.current = Some(entry.key.clone());
        self.size = Size::default();
        Some(entry)
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.current = None;
    }

    /// Record a size pick.
    pub fn select_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The open entry, if any.
    #[must_use]
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a CatalogEntry> {
        self.current.as_ref().and_then(|key| catalog.get(key.as_str()))
    }

    /// Take the open entry for adding to the cart and close the modal.
    ///
    /// Returns `None` without changing anything when nothing is open.
    pub fn confirm<'a>(&mut self, catalog: &'a Catalog) -> Option<&'a CatalogEntry> {
        let entry = self.current(catalog)?;
        self.close();
        Some(entry)
    }
}
