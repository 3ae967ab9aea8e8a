//! Message list and composer input for the chat mode.

use leptos::prelude::*;

use crate::state::chat::{ChatState, StyleTag};

/// Scrolling message list plus the input row for sending new messages.
///
/// The list is a pure projection of the store: one element per message,
/// keyed by message id, auto-scrolled to the newest entry after every
/// store mutation.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if text.is_empty() {
            return;
        }
        #[cfg(feature = "csr")]
        crate::net::composer::send(text, chat);
        #[cfg(not(feature = "csr"))]
        let _ = text;
        // The buffer empties immediately, whatever the send outcome.
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|message| {
                            let class = match (message.style, message.deleted) {
                                (_, true) => "chat-message chat-message--deleted",
                                (StyleTag::ServerNotice, false) => "chat-message chat-message--server",
                                (StyleTag::Normal, false) => "chat-message",
                            };
                            let prefix = message.prefix.clone().unwrap_or_default();
                            let payload = message.payload.clone();
                            view! {
                                <div class=class id=message.id.clone()>
                                    <strong class="chat-message__prefix">{prefix}</strong>
                                    <span class="chat-message__body" inner_html=payload></span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type a message, or /command"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
