//! Session Storage
//!
//! The backend issues an opaque session id that the client echoes on every
//! request. It survives page reloads through a `SessionStore`.

use std::sync::RwLock;

use crate::error::{ChatError, Result};

/// Storage key used by the browser store
pub const SESSION_STORAGE_KEY: &str = "pakrail_session_id";

/// Persistent home of the session identifier
pub trait SessionStore {
    /// Read the stored id, `None` if nothing is stored
    fn load(&self) -> Result<Option<String>>;

    /// Store (or overwrite) the id
    fn save(&self, session_id: &str) -> Result<()>;

    /// Forget the id
    fn clear(&self) -> Result<()>;
}

/// In-memory session store (for native use and testing)
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an id already stored, as after a page reload
    pub fn with_session(session_id: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(Some(session_id.into())),
        }
    }

    fn poisoned<T>(_: T) -> ChatError {
        ChatError::Storage("session store lock poisoned".into())
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.read().map_err(Self::poisoned)?.clone())
    }

    fn save(&self, session_id: &str) -> Result<()> {
        *self.value.write().map_err(Self::poisoned)? = Some(session_id.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.value.write().map_err(Self::poisoned)? = None;
        Ok(())
    }
}
