//! Login mode: username entry plus the inline error readout.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::chat::ChatState;
use crate::state::session::{ConnectionStatus, SessionState};

/// Validate the username field before any network call is made.
fn validate_username(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("\u{26a0}\u{fe0f} Please enter a name.");
    }
    Ok(trimmed.to_owned())
}

/// Username entry form; Enter or the button submits.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let username = RwSignal::new(String::new());

    let busy = move || session.get().status == ConnectionStatus::Connecting;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match validate_username(&username.get()) {
            Err(message) => session.update(|s| s.error = Some(message.to_owned())),
            Ok(name) => {
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(crate::net::connection::connect(name, chat, session));
                #[cfg(not(feature = "csr"))]
                let _ = (name, chat);
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Parley"</h1>
                <p class="login-card__subtitle">"Pick a name to join the chat"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="your name"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        "Connect"
                    </button>
                </form>
                <Show when=move || session.get().error.is_some()>
                    <p class="login-error">{move || session.get().error.unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
