//! Composer: turns user input into an optimistic local entry plus an
//! outbound send.
//!
//! The optimistic echo is appended before the request is even issued; it is
//! never rolled back and never reconciled with the server's own copy of the
//! same logical message (independent id spaces).

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

#[cfg(feature = "csr")]
use leptos::prelude::{RwSignal, Update};

use crate::state::chat::{ChatState, is_command};

/// How one outgoing text hits the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Compose {
    /// Empty input; nothing to send.
    Empty,
    /// Plain message: sent verbatim, optimistic echo already appended.
    Message {
        /// Id of the appended `local-<n>` echo entry.
        echo_id: String,
    },
    /// Command text (leading `/`): sent verbatim, never echoed locally.
    Command,
}

/// Prepare `text` for the wire, appending the optimistic echo for plain
/// messages. The caller clears the input buffer and performs the POST.
pub fn prepare_outgoing(chat: &mut ChatState, text: &str) -> Compose {
    if text.is_empty() {
        return Compose::Empty;
    }
    if is_command(text) {
        return Compose::Command;
    }
    Compose::Message {
        echo_id: chat.push_local_echo(text),
    }
}

/// Send one message or typed command from the input buffer.
///
/// On transport failure an inline error notice is appended; the optimistic
/// echo stays and nothing is retried.
#[cfg(feature = "csr")]
pub fn send(text: String, chat: RwSignal<ChatState>) {
    let action = chat
        .try_update(|c| prepare_outgoing(c, &text))
        .unwrap_or(Compose::Empty);
    if action == Compose::Empty {
        return;
    }

    leptos::task::spawn_local(async move {
        if let Err(error) = crate::net::api::send_message(&text).await {
            leptos::logging::warn!("send failed: {error}");
            chat.update(|c| c.push_send_error());
        }
    });
}

/// Send literal command text on behalf of a UI control.
///
/// No sentinel requirement, no optimistic echo; failure surfaces as a
/// blocking alert since commands are rare and silence would hide them.
#[cfg(feature = "csr")]
pub fn run_command(command: String) {
    leptos::task::spawn_local(async move {
        if let Err(error) = crate::net::api::send_message(&command).await {
            leptos::logging::warn!("command failed: {error}");
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&format!("Could not send command: {error}"));
            }
        }
    });
}
