//! Chat mode: status bar, message list, and command strip.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::components::command_strip::CommandStrip;
use crate::components::status_bar::StatusBar;

/// The connected-session page.
#[component]
pub fn ChatPage() -> impl IntoView {
    view! {
        <div class="chat-page">
            <StatusBar/>
            <ChatPanel/>
            <CommandStrip/>
        </div>
    }
}
