//! Chat Shell
//!
//! Owns the conversation, the loading flag and the session id, and drives one
//! chat round trip per user send.
//!
//! A round trip is split into `begin_send` and `finish_send` so a UI can
//! render the user's message and the typing indicator while the request is
//! in flight. `send_message` runs both halves around a backend call.

use crate::backend::{ChatBackend, ChatReply, ChatRequest, ResetRequest};
use crate::error::Result;
use crate::message::{Conversation, Message};
use crate::session::SessionStore;

/// First message on a fresh page load
pub const GREETING: &str =
    "Assalam-o-Alaikum! 👋 Main aapki train booking mein madad karunga. Naya chat start ho gaya hai.";

/// First message after "New Chat"
pub const NEW_CHAT_GREETING: &str = "Naya chat start ho gaya hai. Aap apna sawal likhein ya just keh dijiye: \"mujhe lahore se karachi jana hai\"";

/// Shown in place of a reply when the round trip fails
pub const APOLOGY: &str = "😔 Server issue aa gaya hai. Thodi der baad try kijiye.";

/// Shown when the backend answers without reply text
pub const REPLY_PLACEHOLDER: &str = "...";

/// Client-side chat state
#[derive(Debug)]
pub struct ChatShell<S> {
    conversation: Conversation,
    session_id: String,
    loading: bool,
    store: S,
}

impl<S: SessionStore> ChatShell<S> {
    /// Create the shell, reading the persisted session id once
    pub fn new(store: S) -> Self {
        let session_id = match store.load() {
            Ok(id) => id.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Could not read stored session id: {}", e);
                String::new()
            }
        };

        Self {
            conversation: Conversation::with_greeting(GREETING),
            session_id,
            loading: false,
            store,
        }
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub const fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Current session id, `None` until the backend has issued one
    pub fn session_id(&self) -> Option<&str> {
        Some(self.session_id.as_str()).filter(|id| !id.is_empty())
    }

    /// True exactly while a chat request is outstanding
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Append the user's message, mark loading and build the request.
    /// Returns `None` (and changes nothing) for blank input.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.conversation.push(Message::user(text));
        self.loading = true;

        Some(ChatRequest::new(text, self.session_id().map(str::to_owned)))
    }

    /// Apply the outcome of a chat request and clear loading
    pub fn finish_send(&mut self, outcome: Result<ChatReply>) {
        match outcome {
            Ok(reply) => {
                if let Some(issued) = reply.issued_session() {
                    if issued != self.session_id {
                        self.adopt_session(issued);
                    }
                }
                let text = reply.text().unwrap_or(REPLY_PLACEHOLDER);
                self.conversation.push(Message::assistant(text));
            }
            Err(e) => {
                tracing::error!("Chat request failed: {}", e);
                self.conversation.push(Message::assistant(APOLOGY));
            }
        }
        self.loading = false;
    }

    fn adopt_session(&mut self, session_id: &str) {
        tracing::debug!("Backend issued session {}", session_id);
        self.session_id = session_id.to_owned();
        if let Err(e) = self.store.save(session_id) {
            tracing::warn!("Could not persist session id: {}", e);
        }
    }

    /// Full round trip: user message in, assistant message (or apology) out
    pub async fn send_message<B>(&mut self, backend: &B, text: &str)
    where
        B: ChatBackend + ?Sized,
    {
        let Some(request) = self.begin_send(text) else {
            return;
        };
        let outcome = backend.chat(&request).await;
        self.finish_send(outcome);
    }

    /// Reset request for the persisted session, if there is one
    pub fn reset_request(&self) -> Option<ResetRequest> {
        match self.store.load() {
            Ok(stored) => stored
                .filter(|id| !id.is_empty())
                .map(|session_id| ResetRequest { session_id }),
            Err(e) => {
                tracing::warn!("Could not read stored session id: {}", e);
                None
            }
        }
    }

    /// Forget the session and start over with the new-chat greeting
    pub fn start_new_chat(&mut self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!("Could not clear stored session id: {}", e);
        }
        self.session_id.clear();
        self.conversation.reset(NEW_CHAT_GREETING);
    }

    /// Best-effort backend reset followed by a local reset
    pub async fn new_chat<B>(&mut self, backend: &B)
    where
        B: ChatBackend + ?Sized,
    {
        let request = self.reset_request();
        reset_session(backend, request).await;
        self.start_new_chat();
    }
}

/// Tell the backend to drop a session, swallowing any failure
pub async fn reset_session<B>(backend: &B, request: Option<ResetRequest>)
where
    B: ChatBackend + ?Sized,
{
    let Some(request) = request else {
        return;
    };
    if let Err(e) = backend.reset(&request).await {
        tracing::debug!("Ignoring reset failure for {}: {}", request.session_id, e);
    }
}
