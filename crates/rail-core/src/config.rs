//! Client Configuration

use crate::session::SESSION_STORAGE_KEY;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Environment variable naming the backend base URL
pub const API_BASE_ENV: &str = "PAKRAIL_API_BASE";

/// Where the client finds the backend and keeps its session id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, no trailing slash
    pub api_base: String,

    /// Key of the persisted session id
    pub storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            storage_key: SESSION_STORAGE_KEY.into(),
        }
    }
}

impl ClientConfig {
    /// Build with a custom backend base URL
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::default().with_api_base(api_base)
    }

    /// Resolve the base URL from the runtime environment, then from the
    /// build environment (the only source in a wasm32 build), then the default.
    pub fn from_env() -> Self {
        let api_base = std::env::var(API_BASE_ENV)
            .ok()
            .or_else(|| option_env!("PAKRAIL_API_BASE").map(str::to_owned))
            .filter(|base| !base.trim().is_empty());

        match api_base {
            Some(base) => Self::new(base),
            None => Self::default(),
        }
    }

    /// Override the backend base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim().trim_end_matches('/').to_owned();
        self
    }

    /// Absolute URL for an API path such as `/api/chat`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
