//! `KeyValueStorage` over the visitor's tower-sessions session.

use tower_sessions::Session;
use tower_sessions::session::Error as SessionError;

use super::{KeyValueStorage, StorageError};

fn map_error(key: &str, err: SessionError) -> StorageError {
    match err {
        SessionError::SerdeJson(e) => StorageError::NotText {
            key: key.to_owned(),
            message: e.to_string(),
        },
        other => StorageError::Unavailable(other.to_string()),
    }
}

impl KeyValueStorage for Session {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.get::<String>(key).await.map_err(|e| map_error(key, e))
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.insert(key, value).await.map_err(|e| map_error(key, e))
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.remove::<serde_json::Value>(key)
            .await
            .map(|_| ())
            .map_err(|e| map_error(key, e))
    }
}
