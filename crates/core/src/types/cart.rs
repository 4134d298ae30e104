//! Cart line items and the pure operations on them.
//!
//! A [`Cart`] is an ordered list of [`LineItem`]s keyed by display name.
//! Insertion order is preserved and never reordered. Two invariants hold
//! after every operation in this module:
//!
//! - names are unique (adding looks up an existing line before appending)
//! - every quantity is at least 1 (decrements clamp, only removal drops a line)
//!
//! # Persisted Format
//!
//! ```text
//! [{"name": "Spider-Man: Hero Swing", "price": 1699, "quantity": 2, "image": null}]
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use super::money::MinorUnits;

/// One entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display name, which is also the line's identity within the cart.
    pub name: String,
    /// Unit price.
    pub price: MinorUnits,
    /// Number of units, always at least 1.
    #[serde(default = "min_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    /// Optional image path, informational only.
    #[serde(default)]
    pub image: Option<String>,
}

impl LineItem {
    /// Create a line with quantity 1.
    #[must_use]
    pub fn new(name: impl Into<String>, price: MinorUnits, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
            image,
        }
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> MinorUnits {
        self.price.times(self.quantity)
    }
}

const fn min_quantity() -> u32 {
    1
}

/// Reads a missing, null or zero quantity as 1.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = Option::<u32>::deserialize(deserializer)?;
    Ok(quantity.unwrap_or(1).max(1))
}

/// Ordered sequence of line items.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from existing lines, keeping their order.
    #[must_use]
    pub const fn from_items(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    /// Parse persisted cart text.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the text is not a JSON array of line items.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize the whole cart for persistence.
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization itself fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Find a line by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Add one unit of `name`.
    ///
    /// Increments the existing line if one matches, otherwise appends a new
    /// line with quantity 1. An existing line keeps its original price and
    /// image. Returns the resulting quantity.
    pub fn add(&mut self, name: &str, price: MinorUnits, image: Option<String>) -> u32 {
        if let Some(item) = self.get_mut(name) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }

        self.items.push(LineItem::new(name, price, image));
        1
    }

    /// Remove every line named `name`. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        self.items.len() != before
    }

    /// Apply `delta` to the quantity of `name`, clamping at 1.
    ///
    /// Returns the new quantity, or `None` if no line matches.
    pub fn change_quantity(&mut self, name: &str, delta: i64) -> Option<u32> {
        let item = self.get_mut(name)?;
        let next = i64::from(item.quantity).saturating_add(delta).max(1);
        item.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        Some(item.quantity)
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> MinorUnits {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self::from_items(items)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn tee() -> MinorUnits {
        MinorUnits::new(1699)
    }

    #[test]
    fn test_add_merges_by_name() {
        let mut cart = Cart::new();
        cart.add("Tee", tee(), None);
        cart.add("Tee", tee(), None);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("Tee").unwrap().quantity, 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add("B", tee(), None);
        cart.add("A", tee(), None);
        cart.add("B", tee(), None);

        let names: Vec<_> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_add_keeps_first_price() {
        let mut cart = Cart::new();
        cart.add("Tee", tee(), Some("/a.png".to_string()));
        cart.add("Tee", MinorUnits::new(1), None);

        let item = cart.get("Tee").unwrap();
        assert_eq!(item.price, tee());
        assert_eq!(item.image.as_deref(), Some("/a.png"));
    }

    #[test]
    fn test_quantity_never_below_one() {
        let mut cart = Cart::new();
        cart.add("Tee", tee(), None);
        cart.add("Tee", tee(), None);

        for _ in 0..5 {
            cart.change_quantity("Tee", -1);
        }
        assert_eq!(cart.get("Tee").unwrap().quantity, 1);

        assert_eq!(cart.change_quantity("Tee", -100), Some(1));
        assert_eq!(cart.change_quantity("Tee", i64::MIN), Some(1));
    }

    #[test]
    fn test_change_quantity_unknown_name() {
        let mut cart = Cart::new();
        cart.add("Tee", tee(), None);
        assert_eq!(cart.change_quantity("Hoodie", 1), None);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total() {
        let cart = Cart::from_items(vec![
            LineItem {
                name: "Tee".to_string(),
                price: tee(),
                quantity: 2,
                image: None,
            },
            LineItem {
                name: "Cap".to_string(),
                price: MinorUnits::new(500),
                quantity: 1,
                image: None,
            },
        ]);

        assert_eq!(cart.total(), MinorUnits::new(3898));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_remove_is_exact() {
        let mut cart = Cart::new();
        cart.add("Tee", tee(), None);
        cart.add("Tee Shirt", MinorUnits::new(900), None);
        cart.add("Tee Shirt", MinorUnits::new(900), None);

        assert!(cart.remove("Tee"));
        assert!(!cart.remove("Tee"));

        assert_eq!(cart.len(), 1);
        let remaining = &cart.items()[0];
        assert_eq!(remaining.name, "Tee Shirt");
        assert_eq!(remaining.quantity, 2);
        assert_eq!(remaining.price, MinorUnits::new(900));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("Tee", tee(), None);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), MinorUnits::ZERO);
    }

    #[test]
    fn test_persisted_format() {
        let mut cart = Cart::new();
        cart.add("Tee", tee(), None);
        assert_eq!(
            cart.to_json().unwrap(),
            r#"[{"name":"Tee","price":1699,"quantity":1,"image":null}]"#
        );
    }

    #[test]
    fn test_parse_defaults_quantity() {
        let cart = Cart::from_json(
            r#"[{"name":"A","price":10},{"name":"B","price":10,"quantity":0,"image":null}]"#,
        )
        .unwrap();
        assert_eq!(cart.get("A").unwrap().quantity, 1);
        assert_eq!(cart.get("B").unwrap().quantity, 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Cart::from_json("not json").is_err());
        assert!(Cart::from_json(r#"{"name":"A"}"#).is_err());
        assert!(Cart::from_json(r#"[{"name":"A","price":-1}]"#).is_err());
    }
}
