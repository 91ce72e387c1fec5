//! Message Composer
//!
//! State behind the text box: pending text, when it may be sent, and what the
//! keyboard does to it.

/// Result of a key-down in the composer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the platform handle the key (Shift+Enter inserts a newline)
    PassThrough,
    /// Suppress the default action; carries the text if it was sent
    Handled(Option<String>),
}

/// Not-yet-sent message text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
    text: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the pending text, e.g. from an input event
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether the send control is enabled
    pub fn can_submit(&self, disabled: bool) -> bool {
        !disabled && !self.text.trim().is_empty()
    }

    /// Take the trimmed text for sending and clear the box
    pub fn submit(&mut self, disabled: bool) -> Option<String> {
        if !self.can_submit(disabled) {
            return None;
        }
        let text = self.text.trim().to_owned();
        self.text.clear();
        Some(text)
    }

    /// Enter without Shift submits; every other key passes through
    pub fn handle_key(&mut self, key: &str, shift: bool, disabled: bool) -> KeyOutcome {
        if key == "Enter" && !shift {
            KeyOutcome::Handled(self.submit(disabled))
        } else {
            KeyOutcome::PassThrough
        }
    }
}

/// Send button caption
pub const fn send_label(disabled: bool) -> &'static str {
    if disabled { "..." } else { "Send" }
}
