//! # rail-runtime
//!
//! Runtime backends for the PakRail chat client.
//!
//! ## Backends
//!
//! - **HTTP** (default): JSON over `reqwest`, in the browser and natively
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rail_core::{ChatShell, MemorySessionStore};
//! use rail_runtime::HttpChatBackend;
//!
//! let backend = HttpChatBackend::from_env();
//! let mut shell = ChatShell::new(MemorySessionStore::new());
//! shell.send_message(&backend, "mujhe karachi jana hai").await;
//! ```

pub mod http;

pub use http::HttpChatBackend;

// Re-export core types for convenience
pub use rail_core::{
    ChatBackend, ChatError, ChatReply, ChatRequest, ChatShell, ClientConfig, ResetRequest, Result,
};
