//! Top status bar: connection indicator, status readout, disconnect control.

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::{ConnectionStatus, SessionState};

/// Status bar for the chat mode.
///
/// The readout region is last-write-wins: each `status` event replaces the
/// previous text, nothing is appended to history.
#[component]
pub fn StatusBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let status_class = move || match session.get().status {
        ConnectionStatus::Connected => "status-bar__dot status-bar__dot--connected",
        ConnectionStatus::Connecting => "status-bar__dot status-bar__dot--connecting",
        ConnectionStatus::Disconnected => "status-bar__dot status-bar__dot--disconnected",
    };

    let username = move || session.get().username.unwrap_or_default();
    let status_line = move || session.get().status_line.unwrap_or_default();

    let on_disconnect = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(crate::net::connection::disconnect(chat, session));
        #[cfg(not(feature = "csr"))]
        let _ = chat;
    };

    view! {
        <div class="status-bar">
            <span class=status_class></span>
            <span class="status-bar__username">{username}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__readout">{status_line}</span>
            <span class="status-bar__spacer"></span>
            <button class="btn status-bar__disconnect" on:click=on_disconnect>
                "Disconnect"
            </button>
        </div>
    }
}
