//! In-process `KeyValueStorage`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::{KeyValueStorage, StorageError};

/// A cloneable in-memory key-value map.
///
/// Clones share the same underlying map, like two handles on one visitor's
/// storage. [`MemoryStorage::unavailable`] builds a store whose every call
/// fails, for exercising degraded paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<HashMap<String, String>>>,
    unavailable: bool,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that fails every operation.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            inner: Arc::default(),
            unavailable: true,
        }
    }

    /// Create a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            inner: Arc::new(Mutex::new(map)),
            unavailable: false,
        }
    }

    fn with_map<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> T,
    ) -> Result<T, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage disabled".to_string()));
        }
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(f(&mut map))
    }
}

impl KeyValueStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_map(|map| map.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.with_map(|map| {
            map.insert(key.to_owned(), value);
        })
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.with_map(|map| {
            map.remove(key);
        })
    }
}
