//! Buttons that fire backend commands without touching the input buffer.

use leptos::prelude::*;

/// Commands exposed as one-click controls, sent verbatim.
const COMMANDS: [(&str, &str); 2] = [("Help", "/help"), ("Who is online", "/users")];

/// Strip of backend-command buttons.
///
/// Commands are never echoed optimistically; any reply arrives through the
/// poll channel like every other server event.
#[component]
pub fn CommandStrip() -> impl IntoView {
    view! {
        <div class="command-strip">
            {COMMANDS
                .into_iter()
                .map(|(label, command)| {
                    let on_click = move |_| {
                        #[cfg(feature = "csr")]
                        crate::net::composer::run_command(command.to_owned());
                        #[cfg(not(feature = "csr"))]
                        let _ = command;
                    };
                    view! {
                        <button class="btn command-strip__button" on:click=on_click>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
