//! Shared wire model for the chat backend's HTTP poll protocol.
//!
//! This crate owns the JSON shapes spoken by both front ends (`client` and
//! `cli`). The backend never pushes: everything server-originated arrives as
//! an ordered JSON array fetched from `/poll`, and [`decode_events`] is
//! deliberately tolerant: entries it cannot understand are dropped, never
//! surfaced as errors, so one malformed queue entry cannot wedge the loop.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_events`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The poll body was valid JSON but not an array.
    #[error("poll response is not an array")]
    NotAnArray,
}

/// Marker substring the backend puts in a `status` payload when it has
/// force-closed the session (timeout, kick). The backend emits Spanish
/// status text; this constant is part of its wire contract.
pub const DISCONNECT_MARKER: &str = "Desconectado";

/// Prefix markers the backend attaches to system and role messages.
/// A prefix containing any of these renders with server-notice styling.
pub const SERVER_PREFIX_MARKERS: [&str; 8] = [
    "Servidor",         // system messages
    "ADMIN",            // admin messages
    "\u{2705}",         // login/success check mark
    "\u{274c}",         // error/exit cross mark
    "\u{26d4}",         // kick/ban no-entry sign
    "\u{1f3b2}",        // game-start die
    "\u{2b50}",         // game-win star
    "\u{26a0}\u{fe0f}", // warning sign
];

/// Whether a message prefix marks a system/role message.
#[must_use]
pub fn is_server_notice(prefix: &str) -> bool {
    SERVER_PREFIX_MARKERS
        .iter()
        .any(|marker| prefix.contains(marker))
}

/// One server-originated event consumed from the `/poll` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerEvent {
    /// Informational signal, or forced termination when the payload carries
    /// [`DISCONNECT_MARKER`].
    Status {
        /// Status text; replaces the previous status readout.
        payload: String,
    },
    /// A chat message to display, upserted by `id`.
    Chat {
        /// Server-assigned message identity. Absent for transient messages;
        /// the consumer synthesizes one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Short sender label (name, icon, role marker).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
        /// Message body, may contain simple markup.
        #[serde(default)]
        payload: String,
    },
    /// Wipe all displayed messages.
    Clear,
    /// Mark one existing message as removed, preserving its slot.
    Delete {
        /// Identity of the message to mark removed.
        id: String,
    },
}

impl ServerEvent {
    /// Whether this is a `status` event demanding a forced disconnect.
    #[must_use]
    pub fn is_forced_disconnect(&self) -> bool {
        match self {
            Self::Status { payload } => payload.contains(DISCONNECT_MARKER),
            _ => false,
        }
    }
}

/// Reply body from `POST /connect`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectReply {
    /// `"ok"` on success; anything else is a rejection.
    pub status: String,
    /// Human-readable detail, present on rejections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl ConnectReply {
    /// Whether the backend accepted the connection.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Rejection detail, falling back to the raw status.
    #[must_use]
    pub fn rejection(&self) -> &str {
        self.msg.as_deref().unwrap_or(&self.status)
    }
}

/// Decode a `/poll` response body into the events it contains.
///
/// Array entries with a missing or unrecognized `type`, null entries, and
/// entries whose fields do not match their declared kind are skipped; the
/// relative order of the surviving events is preserved.
///
/// # Errors
///
/// Returns [`DecodeError::NotAnArray`] when the body is not a JSON array.
pub fn decode_events(body: &Value) -> Result<Vec<ServerEvent>, DecodeError> {
    let Some(items) = body.as_array() else {
        return Err(DecodeError::NotAnArray);
    };

    Ok(items
        .iter()
        .filter_map(|item| serde_json::from_value::<ServerEvent>(item.clone()).ok())
        .collect())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
