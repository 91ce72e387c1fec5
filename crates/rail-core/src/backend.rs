//! Chat Backend Seam
//!
//! Wire types for the remote chat API and the trait the shell talks through.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rail_core::{ChatBackend, ChatRequest};
//!
//! let reply = backend.chat(&ChatRequest::new("mujhe lahore jana hai", None)).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Body of `POST /api/chat`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,

    /// Serialised as `null` until the backend has issued an id
    pub session_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Successful body of `POST /api/chat`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,

    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatReply {
    /// Reply text, `None` when missing or empty
    pub fn text(&self) -> Option<&str> {
        self.reply.as_deref().filter(|r| !r.is_empty())
    }

    /// Issued session id, `None` when missing or empty
    pub fn issued_session(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|s| !s.is_empty())
    }
}

/// Body of `POST /api/reset`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub session_id: String,
}

/// Remote chat API
///
/// Futures are `?Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait ChatBackend {
    /// Send one user message and wait for the assistant reply.
    /// Any non-2xx status is an error.
    async fn chat(&self, request: &ChatRequest) -> Result<ChatReply>;

    /// Ask the backend to drop a session
    async fn reset(&self, request: &ResetRequest) -> Result<()>;

    /// Check if the backend is reachable
    async fn health_check(&self) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_session_sends_null() {
        let body = serde_json::to_value(ChatRequest::new("hi", None)).unwrap();
        assert_eq!(body, json!({ "message": "hi", "sessionId": null }));
    }

    #[test]
    fn test_request_with_session() {
        let body = serde_json::to_value(ChatRequest::new("hi", Some("abc".into()))).unwrap();
        assert_eq!(body, json!({ "message": "hi", "sessionId": "abc" }));
    }

    #[test]
    fn test_reply_optional_fields() {
        let reply: ChatReply = serde_json::from_value(json!({})).unwrap();
        assert_eq!(reply.text(), None);
        assert_eq!(reply.issued_session(), None);

        let reply: ChatReply =
            serde_json::from_value(json!({ "reply": "", "sessionId": "" })).unwrap();
        assert_eq!(reply.text(), None);
        assert_eq!(reply.issued_session(), None);

        let reply: ChatReply =
            serde_json::from_value(json!({ "reply": "Hello", "sessionId": "abc" })).unwrap();
        assert_eq!(reply.text(), Some("Hello"));
        assert_eq!(reply.issued_session(), Some("abc"));
    }

    #[test]
    fn test_reset_body() {
        let body = serde_json::to_value(ResetRequest { session_id: "abc".into() }).unwrap();
        assert_eq!(body, json!({ "sessionId": "abc" }));
    }
}
