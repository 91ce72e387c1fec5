//! # rail-core
//!
//! Framework-agnostic core of the PakRail chat client.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ChatShell                             │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐   │
//! │  │ Conversation │  │ SessionStore │  │   ChatBackend    │   │
//! │  │  (history)   │──│  (persisted  │──│   (/api/chat,    │   │
//! │  │              │  │  session id) │  │    /api/reset)   │   │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in here touches the DOM or the network directly. The web crate
//! renders a `ChatShell` and the runtime crate supplies the HTTP backend.

pub mod backend;
pub mod config;
pub mod error;
pub mod input;
pub mod markup;
pub mod message;
pub mod session;
pub mod shell;

pub use backend::{ChatBackend, ChatReply, ChatRequest, ResetRequest};
pub use config::ClientConfig;
pub use error::{ChatError, Result};
pub use input::{Composer, KeyOutcome};
pub use markup::Inline;
pub use message::{Conversation, Message, MessageId, Role};
pub use session::{MemorySessionStore, SessionStore};
pub use shell::ChatShell;
