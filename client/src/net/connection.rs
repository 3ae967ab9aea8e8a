//! Connection manager: connect/disconnect transitions and the session reset.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures and server rejections surface in the login error
//! readout with no state change; a transport failure gets its own distinct
//! message. Disconnect notifies the backend best-effort only; the reset
//! below is the real cleanup path.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::poll;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;

#[cfg(any(test, feature = "csr"))]
fn rejection_error_message(reason: &str) -> String {
    format!("Server error: {reason}")
}

/// State transition for an accepted connect: record the session identity,
/// wipe any previously rendered history, and append the welcome notice.
/// The connected flag is what switches the visible mode to chat.
pub fn enter_chat(chat: &mut ChatState, session: &mut SessionState, username: &str) {
    session.mark_connected(username);
    chat.reset();
    chat.push_welcome(username);
}

/// Connect as `username` and, on success, enter the chat mode and start the
/// poll loop (cancel-then-start; never two live loops).
///
/// The username is assumed non-empty: the login form validates before
/// calling here.
#[cfg(feature = "csr")]
pub async fn connect(username: String, chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    use crate::state::session::ConnectionStatus;

    session.update(|s| {
        s.status = ConnectionStatus::Connecting;
        s.error = None;
    });

    match crate::net::api::connect(&username).await {
        Ok(reply) if reply.is_ok() => {
            chat.update(|c| session.update(|s| enter_chat(c, s, &username)));
            poll::start(chat, session);
        }
        Ok(reply) => {
            session.update(|s| {
                s.status = ConnectionStatus::Disconnected;
                s.error = Some(rejection_error_message(reply.rejection()));
            });
        }
        Err(error) => {
            session.update(|s| {
                s.status = ConnectionStatus::Disconnected;
                s.error = Some(error);
            });
        }
    }
}

/// Notify the backend best-effort, then reset the client unconditionally.
#[cfg(feature = "csr")]
pub async fn disconnect(chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    crate::net::api::disconnect().await;
    reset_session(chat, session);
}

/// Full client reset: cancel the poll timer, clear the message store and
/// session state, and return the UI to the login mode. Equivalent to a
/// fresh page load, without reloading anything.
pub fn reset_session(chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    poll::stop();
    chat.update(ChatState::reset);
    session.update(SessionState::reset);
}

/// Forced-termination path: blocking notice first, then the full reset.
#[cfg(feature = "csr")]
pub fn forced_reset(payload: &str, chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(payload);
    }
    reset_session(chat, session);
}
