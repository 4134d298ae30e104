//! Persisted theme preference.

use cottonfront_core::Theme;

use crate::storage::{KeyValueStorage, StorageError, keys};

/// Read the stored theme, if any. Unknown or unreadable values count as unset.
pub async fn stored_theme<S: KeyValueStorage>(storage: &S) -> Option<Theme> {
    match storage.get_item(keys::THEME).await {
        Ok(Some(text)) => Theme::parse(&text)
            .inspect_err(|e| tracing::debug!(error = %e, "ignoring stored theme"))
            .ok(),
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "theme storage unreadable");
            None
        }
    }
}

/// The theme to render with: stored choice, else the client's hint, else dark.
pub async fn current_theme<S: KeyValueStorage>(storage: &S, prefers_light: Option<bool>) -> Theme {
    Theme::resolve(stored_theme(storage).await, prefers_light)
}

/// Persist `theme` as the visitor's choice.
///
/// # Errors
///
/// Returns an error if storage rejects the write.
pub async fn set_theme<S: KeyValueStorage>(storage: &S, theme: Theme) -> Result<(), StorageError> {
    storage.set_item(keys::THEME, theme.as_str().to_owned()).await
}

/// Flip the current theme and persist the result.
///
/// # Errors
///
/// Returns an error if storage rejects the write.
pub async fn toggle_theme<S: KeyValueStorage>(
    storage: &S,
    prefers_light: Option<bool>,
) -> Result<Theme, StorageError> {
    let next = current_theme(storage, prefers_light).await.toggled();
    set_theme(storage, next).await?;
    Ok(next)
}
