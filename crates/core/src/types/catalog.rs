//! Static product catalog.
//!
//! The catalog is built once at startup from an embedded table and never
//! mutated afterwards. Entries keep the table's order so listings are stable.

use serde::Serialize;

use super::id::ProductKey;
use super::money::MinorUnits;

/// A product available in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub key: ProductKey,
    pub name: String,
    pub price: MinorUnits,
    pub image: String,
    pub description: String,
}

/// Embedded product table: key, name, price, image, description.
const PRODUCTS: &[(&str, &str, u64, &str, &str)] = &[
    (
        "bugs-bunny",
        "Bugs Bunny: Hot Moves",
        1699,
        "/static/images/products/bugs-bunny.png",
        "Electric gradients meet Looney Tunes nostalgia. Cut from breathable combed cotton with a buttery finish and a playful oversized fit.",
    ),
    (
        "samurai-jack",
        "Samurai Jack: Warrior",
        1699,
        "/static/images/products/samurai-jack.png",
        "Honor and style collide in this modern tribute to the legendary samurai. Premium cotton with vibrant prints.",
    ),
    (
        "spider-man",
        "Spider-Man: Hero Swing",
        1699,
        "/static/images/products/spider-man.png",
        "Swing into action with this dynamic Spider-Man design. Features premium fabric and bold graphics.",
    ),
    (
        "jurassic-park",
        "Jurassic Park: Tilescape",
        1699,
        "/static/images/products/jurassic-park.png",
        "Classic Jurassic Park nostalgia in a fresh tiled design. Soft cotton blend with iconic branding.",
    ),
    (
        "super-pants",
        "Super Pants: Brown Stripes",
        1699,
        "/static/images/products/super-pants.png",
        "Retro vibes with modern comfort. Striped design on ultra-soft fabric for all-day wear.",
    ),
];

/// Immutable mapping from product key to entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build the shop's built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = PRODUCTS
            .iter()
            .map(|&(key, name, price, image, description)| CatalogEntry {
                key: ProductKey::new(key),
                name: name.to_owned(),
                price: MinorUnits::new(price),
                image: image.to_owned(),
                description: description.to_owned(),
            })
            .collect();

        Self { entries }
    }

    /// Build a catalog from arbitrary entries. Later duplicates of a key are ignored.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut unique: Vec<CatalogEntry> = Vec::new();
        for entry in entries {
            if !unique.iter().any(|e| e.key == entry.key) {
                unique.push(entry);
            }
        }
        Self { entries: unique }
    }

    /// Look up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.key.as_str() == key)
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
