//! Root application component and shared state contexts.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::chat::ChatPage;
use crate::pages::login::LoginPage;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the session and message-store contexts and switches the visible
/// mode between login and chat on the connection status; `reset_session`
/// lands back on the login mode without a page reload.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(session);
    provide_context(chat);

    #[cfg(feature = "csr")]
    install_unload_hook();

    view! {
        <Title text="Parley"/>

        <Show when=move || session.get().is_connected() fallback=|| view! { <LoginPage/> }>
            <ChatPage/>
        </Show>
    }
}

/// Fire a best-effort disconnect beacon when the tab goes away. A beacon
/// never blocks page teardown, unlike an awaited request.
#[cfg(feature = "csr")]
fn install_unload_hook() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let hook = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        crate::net::api::disconnect_beacon();
    });
    let _ = window.add_event_listener_with_callback("beforeunload", hook.as_ref().unchecked_ref());
    // Leak the closure: it must outlive this call and lives for the page.
    hook.forget();
}
