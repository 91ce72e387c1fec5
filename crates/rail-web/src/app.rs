//! Main App Component

use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rail_core::shell::reset_session;
use rail_core::{ChatBackend, ChatReply, ChatShell, ClientConfig, Message, Result, SessionStore};
use rail_runtime::HttpChatBackend;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{MessageBubble, MessageInput, TypingIndicator};
use crate::storage::LocalSessionStore;

/// Finish a chat round trip. Returns `None` and does nothing once the shell
/// has been disposed, so a reply landing after teardown is inert.
fn apply_reply<S>(shell: RwSignal<ChatShell<S>>, outcome: Result<ChatReply>) -> Option<()>
where
    S: SessionStore + Send + Sync + 'static,
{
    shell.try_update(|s| s.finish_send(outcome))
}

/// Local half of "New Chat"; inert after disposal like `apply_reply`
fn apply_new_chat<S>(shell: RwSignal<ChatShell<S>>) -> Option<()>
where
    S: SessionStore + Send + Sync + 'static,
{
    shell.try_update(ChatShell::start_new_chat)
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    tracing::info!("Chat backend at {}", config.api_base);

    let shell = RwSignal::new(ChatShell::new(LocalSessionStore::new(
        config.storage_key.clone(),
    )));
    let backend = StoredValue::new_local(HttpChatBackend::from_config(config));
    let loading = Memo::new(move |_| shell.with(|s| s.is_loading()));
    let bottom = NodeRef::<Div>::new();

    let probe = backend.get_value();
    spawn_local(async move {
        match probe.health_check().await {
            Ok(true) => tracing::info!("✓ Connected to chat backend"),
            Ok(false) | Err(_) => tracing::warn!("⚠ Chat backend not reachable, replies will fail"),
        }
    });

    Effect::new(move |_| {
        shell.track();
        loading.track();
        if let Some(el) = bottom.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send_message = move |text: String| {
        let Some(request) = shell.try_update(|s| s.begin_send(&text)).flatten() else {
            return;
        };
        let backend = backend.get_value();
        spawn_local(async move {
            let outcome = backend.chat(&request).await;
            apply_reply(shell, outcome);
        });
    };

    let new_chat = move |_: MouseEvent| {
        let request = shell.with_untracked(|s| s.reset_request());
        let backend = backend.get_value();
        spawn_local(async move {
            reset_session(&backend, request).await;
            apply_new_chat(shell);
        });
    };

    view! {
        <div class="app">
            <header class="app-header">
                <div class="brand">
                    <span class="logo">"🚂"</span>
                    <div class="brand-text">
                        <div class="title">"PakRail AI"</div>
                        <div class="subtitle">"Pakistan Railway Booking Assistant"</div>
                    </div>
                </div>
                <div class="header-actions">
                    <button class="btn ghost" on:click=new_chat>"+ New Chat"</button>
                    <a class="btn primary" href="https://pakrail.gov.pk" target="_blank" rel="noreferrer">
                        "PakRail"
                    </a>
                </div>
            </header>

            <main class="chat-container">
                <For
                    each=move || shell.with(|s| s.messages().to_vec())
                    key=Message::id
                    children=move |message| view! { <MessageBubble message=message /> }
                />
                <Show when=move || loading.get()>
                    <TypingIndicator />
                </Show>
                <div node_ref=bottom></div>
            </main>

            <footer class="chat-input">
                <MessageInput on_send=send_message disabled=loading />
                <div class="hint">
                    "Tip: Enter se send, Shift+Enter se new line. New chat ke liye top right button use karein."
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rail_core::shell::{APOLOGY, NEW_CHAT_GREETING};
    use rail_core::{ChatError, MemorySessionStore};

    fn reply(text: &str, session: &str) -> Result<ChatReply> {
        Ok(ChatReply {
            reply: Some(text.into()),
            session_id: Some(session.into()),
        })
    }

    #[test]
    fn test_reply_applies_while_mounted() {
        let owner = Owner::new();
        let shell = owner.with(|| RwSignal::new(ChatShell::new(MemorySessionStore::new())));
        shell.update(|s| {
            s.begin_send("hi");
        });

        assert_eq!(apply_reply(shell, reply("salam", "abc")), Some(()));
        shell.with_untracked(|s| {
            assert_eq!(s.messages().len(), 3);
            assert_eq!(s.session_id(), Some("abc"));
            assert!(!s.is_loading());
        });

        assert_eq!(apply_reply(shell, Err(ChatError::Status(500))), Some(()));
        shell.with_untracked(|s| {
            assert_eq!(s.conversation().last().unwrap().content(), APOLOGY);
        });
    }

    #[test]
    fn test_reply_after_teardown_is_inert() {
        let owner = Owner::new();
        let shell = owner.with(|| RwSignal::new(ChatShell::new(MemorySessionStore::new())));
        shell.update(|s| {
            s.begin_send("hi");
        });

        owner.cleanup();

        assert_eq!(apply_reply(shell, reply("late", "abc")), None);
        assert_eq!(apply_reply(shell, Err(ChatError::Transport("refused".into()))), None);
        assert!(shell.try_with_untracked(|s| s.messages().len()).is_none());
    }

    #[test]
    fn test_new_chat_applies_while_mounted() {
        let owner = Owner::new();
        let store = MemorySessionStore::with_session("abc");
        let shell = owner.with(|| RwSignal::new(ChatShell::new(store)));

        assert_eq!(apply_new_chat(shell), Some(()));
        shell.with_untracked(|s| {
            assert_eq!(s.session_id(), None);
            assert_eq!(s.messages().len(), 1);
            assert_eq!(s.messages()[0].content(), NEW_CHAT_GREETING);
        });
    }

    #[test]
    fn test_new_chat_after_teardown_is_inert() {
        let owner = Owner::new();
        let shell = owner.with(|| RwSignal::new(ChatShell::new(MemorySessionStore::new())));

        owner.cleanup();

        assert_eq!(apply_new_chat(shell), None);
    }
}
