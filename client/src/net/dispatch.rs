//! Event classifier: applies server events to the store and session.
//!
//! DESIGN
//! ======
//! Application is a pure function over `(&mut ChatState, &mut SessionState)`
//! returning an [`EventOutcome`], so the effectful shell (blocking notice,
//! session reset) stays at the edges and the classifier is native-testable.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use events::{DISCONNECT_MARKER, ServerEvent};
use uuid::Uuid;

use crate::state::chat::{ChatState, Message};
use crate::state::session::SessionState;

/// Effect demanded by an applied event that the pure layer cannot perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// State was mutated (or the event was a no-op); nothing further to do.
    Applied,
    /// Forced termination: show a blocking notice with this payload, then
    /// perform a full session reset.
    ForcedDisconnect(String),
}

/// Synthesize an id for a `chat` event the server sent without one.
#[must_use]
pub fn synthesize_message_id() -> String {
    format!("msg-{}", Uuid::new_v4())
}

/// Apply one server event.
///
/// - `status` with the backend's disconnect marker demands a forced reset;
///   any other `status` replaces the last-write-wins status readout.
/// - `chat` is resolved to a [`Message`] (id synthesized when absent) and
///   upserted by id.
/// - `clear` wipes the store and installs the synthetic clear notice.
/// - `delete` marks the entry removed in place; unknown ids are a no-op.
pub fn apply_event(
    chat: &mut ChatState,
    session: &mut SessionState,
    event: ServerEvent,
) -> EventOutcome {
    match event {
        ServerEvent::Status { payload } => {
            if payload.contains(DISCONNECT_MARKER) {
                return EventOutcome::ForcedDisconnect(payload);
            }
            session.status_line = Some(payload);
            EventOutcome::Applied
        }
        ServerEvent::Chat { id, prefix, payload } => {
            let id = id.unwrap_or_else(synthesize_message_id);
            chat.upsert(Message::new(id, prefix, payload));
            EventOutcome::Applied
        }
        ServerEvent::Clear => {
            chat.clear_all();
            EventOutcome::Applied
        }
        ServerEvent::Delete { id } => {
            chat.mark_deleted(&id);
            EventOutcome::Applied
        }
    }
}

/// Apply one poll batch strictly in array order, synchronously and in
/// sequence. Stops at the first forced-disconnect outcome; once the session
/// resets, the rest of the batch has nothing to apply to.
pub fn apply_events(
    chat: &mut ChatState,
    session: &mut SessionState,
    batch: Vec<ServerEvent>,
) -> EventOutcome {
    for event in batch {
        if let EventOutcome::ForcedDisconnect(payload) = apply_event(chat, session, event) {
            return EventOutcome::ForcedDisconnect(payload);
        }
    }
    EventOutcome::Applied
}
