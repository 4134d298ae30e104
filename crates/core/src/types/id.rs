//! Newtype keys for type-safe entity references.
//!
//! Use the `define_key!` macro to create string key wrappers that prevent
//! accidentally passing a display name where a lookup key is expected.

/// Macro to define a type-safe string key wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>`, `From<&str>` and `From<String>`
///
/// # Example
///
/// ```rust
/// # use cottonfront_core::define_key;
/// define_key!(ProductKey);
/// define_key!(CollectionKey);
///
/// let product = ProductKey::new("spider-man");
/// assert_eq!(product.as_str(), "spider-man");
///
/// // These are different types, so this won't compile:
/// // let _: CollectionKey = product;
/// ```
#[macro_export]
macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key from a string.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the key and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }
    };
}

define_key!(ProductKey);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_key_is_transparent() {
        let key = ProductKey::new("bugs-bunny");
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"bugs-bunny\"");
        assert_eq!(key.to_string(), "bugs-bunny");
    }

    #[test]
    fn test_product_key_from_str() {
        let key: ProductKey = "super-pants".into();
        assert_eq!(key, ProductKey::new(String::from("super-pants")));
    }
}
