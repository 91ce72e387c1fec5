//! Browser Session Store

use rail_core::{ChatError, Result, SessionStore};

/// Session id kept in `window.localStorage`
///
/// Holds only the key; the storage handle is looked up per call so the store
/// stays `Send + Sync` and can live inside a signal.
#[derive(Clone, Debug)]
pub struct LocalSessionStore {
    key: String,
}

impl LocalSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| ChatError::Storage("no window".into()))?
            .local_storage()
            .map_err(|e| ChatError::Storage(format!("{e:?}")))?
            .ok_or_else(|| ChatError::Storage("localStorage unavailable".into()))
    }
}

impl SessionStore for LocalSessionStore {
    fn load(&self) -> Result<Option<String>> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| ChatError::Storage(format!("{e:?}")))
    }

    fn save(&self, session_id: &str) -> Result<()> {
        Self::storage()?
            .set_item(&self.key, session_id)
            .map_err(|e| ChatError::Storage(format!("{e:?}")))
    }

    fn clear(&self) -> Result<()> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| ChatError::Storage(format!("{e:?}")))
    }
}
