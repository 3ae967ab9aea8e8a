//! HTTP helpers for the backend's four-endpoint surface.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds get stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics: connect and
//! send failures become user-visible text, poll failures become log lines.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use events::{ConnectReply, ServerEvent};

#[cfg(any(test, feature = "csr"))]
fn unreachable_backend_message() -> String {
    "Could not reach the chat backend.".to_owned()
}

#[cfg(any(test, feature = "csr"))]
fn poll_failed_message(status: u16) -> String {
    format!("poll request failed: {status}")
}

/// Issue `POST /connect` for `username`.
///
/// A rejection is still `Ok` (the reply carries the reason); `Err` means the
/// request could not be completed at all.
///
/// # Errors
///
/// Returns a user-facing message when the backend is unreachable or answers
/// with a body that is not a connect reply.
pub async fn connect(username: &str) -> Result<ConnectReply, String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "username": username });
        let resp = gloo_net::http::Request::post("/connect")
            .json(&payload)
            .map_err(|_| unreachable_backend_message())?
            .send()
            .await
            .map_err(|_| unreachable_backend_message())?;
        resp.json::<ConnectReply>()
            .await
            .map_err(|_| unreachable_backend_message())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = username;
        Err("not available outside the browser".to_owned())
    }
}

/// Issue a best-effort `POST /disconnect`. The response and any failure are
/// ignored; this call is not the source of truth for cleanup.
pub async fn disconnect() {
    #[cfg(feature = "csr")]
    {
        let _ = gloo_net::http::Request::post("/disconnect").send().await;
    }
}

/// Fire a non-blocking disconnect beacon during page teardown.
#[cfg(feature = "csr")]
pub fn disconnect_beacon() {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().send_beacon("/disconnect");
    }
}

/// Issue `POST /send` with the raw outgoing text. The response body is
/// ignored; the backend answers via the poll channel if at all.
///
/// # Errors
///
/// Returns a message when the request could not be completed.
pub async fn send_message(text: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "message": text });
        gloo_net::http::Request::post("/send")
            .json(&payload)
            .map_err(|_| unreachable_backend_message())?
            .send()
            .await
            .map_err(|_| unreachable_backend_message())?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err("not available outside the browser".to_owned())
    }
}

/// Issue `GET /poll` and decode the pending events, in arrival order.
///
/// # Errors
///
/// Returns a log-worthy message on transport failure, a non-success status,
/// or a body that is not an event array.
pub async fn poll() -> Result<Vec<ServerEvent>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get("/poll")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(poll_failed_message(resp.status()));
        }
        let body = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| e.to_string())?;
        events::decode_events(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
