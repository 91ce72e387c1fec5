//! UI Components

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use rail_core::input::send_label;
use rail_core::markup::{self, Inline};
use rail_core::{Composer, KeyOutcome, Message, Role};

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let role = message.role();
    let is_user = role == Role::User;
    let class = format!("bubble {}", role.css_class());
    let nodes = markup::parse(message.content());

    view! {
        <div class=class>
            {(!is_user).then(|| view! { <div class="avatar">{role.avatar()}</div> })}
            <div class="bubble-content">
                <div class="text">{nodes.into_iter().map(render_inline).collect_view()}</div>
                <div class="meta">{role.label()}</div>
            </div>
            {is_user.then(|| view! { <div class="avatar user">{role.avatar()}</div> })}
        </div>
    }
}

/// Text goes through text nodes, so nothing in a message is parsed as HTML
fn render_inline(node: Inline) -> AnyView {
    match node {
        Inline::Text(text) => text.into_any(),
        Inline::LineBreak => view! { <br /> }.into_any(),
        Inline::Bold(children) => view! {
            <strong>{children.into_iter().map(render_inline).collect_view()}</strong>
        }
        .into_any(),
    }
}

/// Three bouncing dots shown while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="bubble assistant">
            <div class="typing">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
        </div>
    }
}

/// Message box with send button
#[component]
pub fn MessageInput<F>(
    /// Receives the trimmed text of each submission
    on_send: F,
    /// True while a request is outstanding
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView
where
    F: Fn(String) + Clone + Send + Sync + 'static,
{
    let composer = RwSignal::new(Composer::new());

    let submit = {
        let on_send = on_send.clone();
        move || {
            let sent = composer
                .try_update(|c| c.submit(disabled.get_untracked()))
                .flatten();
            if let Some(text) = sent {
                on_send(text);
            }
        }
    };

    let on_keydown = move |ev: KeyboardEvent| {
        let outcome = composer
            .try_update(|c| c.handle_key(&ev.key(), ev.shift_key(), disabled.get_untracked()));
        if let Some(KeyOutcome::Handled(sent)) = outcome {
            ev.prevent_default();
            if let Some(text) = sent {
                on_send(text);
            }
        }
    };

    view! {
        <div class="input-wrapper">
            <textarea
                class="input"
                placeholder="Yahan type karein... (e.g. mujhe karachi se lahore jana hai kal)"
                rows="1"
                prop:value=move || composer.with(|c| c.text().to_owned())
                on:input=move |ev| composer.update(|c| c.set_text(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button
                class="btn send"
                on:click=move |_| submit()
                disabled=move || !composer.with(|c| c.can_submit(disabled.get()))
            >
                {move || send_label(disabled.get())}
            </button>
        </div>
    }
}
