//! Terminal session owning the live poll task.
//!
//! At most one poll task exists per session: starting a new one aborts the
//! previous handle before spawning, so loops never accumulate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use events::ServerEvent;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::backend::Backend;

/// Poll period.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// One connected terminal session.
#[derive(Debug)]
pub struct Session {
    /// Name this session connected as.
    pub username: String,
    /// The single live poll task; replaced handles are aborted first.
    poll: Option<JoinHandle<()>>,
}

impl Session {
    /// Fresh session for `username`, not yet polling.
    #[must_use]
    pub fn new(username: String) -> Self {
        Self {
            username,
            poll: None,
        }
    }

    /// Start the poll loop, aborting any previously running one.
    pub fn start_polling(&mut self, backend: Backend, events_tx: UnboundedSender<ServerEvent>) {
        if let Some(previous) = self.poll.take() {
            previous.abort();
        }
        self.poll = Some(tokio::spawn(poll_loop(backend, events_tx)));
    }

    /// Abort the poll loop, if any.
    pub fn stop_polling(&mut self) {
        if let Some(handle) = self.poll.take() {
            handle.abort();
        }
    }

    /// Whether a poll task is currently owned.
    #[must_use]
    pub fn is_polling(&self) -> bool {
        self.poll.is_some()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop_polling();
    }
}

/// Fixed-interval poll loop: fetch pending events every tick and forward
/// them in arrival order. Failures are logged and skipped; there is no
/// backoff and the loop never stops itself.
async fn poll_loop(backend: Backend, events_tx: UnboundedSender<ServerEvent>) {
    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        match backend.poll().await {
            Ok(batch) => {
                for event in batch {
                    if events_tx.send(event).is_err() {
                        // Receiver gone; the session is over.
                        return;
                    }
                }
            }
            Err(error) => tracing::warn!(error = %error, "poll failed"),
        }
    }
}
