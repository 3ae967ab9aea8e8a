//! Session state for one connection attempt.
//!
//! Lifecycle-scoped: populated by a successful connect, wiped by
//! `reset_session`. The poll timer itself is owned by `net::poll` (it is a
//! browser resource, not `Clone`-able signal data); this model carries the
//! connection facts the UI projects.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Connection lifecycle state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// Not connected; the login mode is visible.
    #[default]
    Disconnected,
    /// A connect request is in flight.
    Connecting,
    /// Connected; the chat mode is visible and the poll loop is running.
    Connected,
}

/// Session state scoped to one connection attempt.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    /// Username recorded on successful connect, cleared on reset.
    pub username: Option<String>,
    /// Connection lifecycle state.
    pub status: ConnectionStatus,
    /// Persistent status readout fed by `status` events, last-write-wins.
    pub status_line: Option<String>,
    /// Inline error readout (validation failure, rejection, transport).
    pub error: Option<String>,
}

impl SessionState {
    /// Whether the chat mode is visible.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    /// Record a successful connect for `username`.
    pub fn mark_connected(&mut self, username: &str) {
        self.username = Some(username.to_owned());
        self.status = ConnectionStatus::Connected;
        self.error = None;
    }

    /// Return to the initial login-capable state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
