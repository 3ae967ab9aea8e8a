//! Fixed-interval poll loop driving the event classifier.
//!
//! DESIGN
//! ======
//! A 500 ms `Interval` fires regardless of in-flight request completion:
//! each tick spawns an independent fetch task, so a slow response never
//! delays the next tick and two overlapping responses may apply out of
//! order across batches (within one batch order is strict). Poll failures
//! are logged and skipped; the loop never backs off and never stops itself.
//!
//! The single live timer is owned by a client-local slot. Starting a new
//! loop drops the previous `Interval`, which cancels it; there is never
//! more than one live timer.

use crate::state::chat::ChatState;
use crate::state::session::SessionState;
use leptos::prelude::RwSignal;
#[cfg(feature = "csr")]
use leptos::prelude::Update;

/// Poll period in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 500;

#[cfg(feature = "csr")]
thread_local! {
    static POLL_TIMER: std::cell::RefCell<Option<gloo_timers::callback::Interval>> =
        const { std::cell::RefCell::new(None) };
}

/// Start the poll loop, cancelling any previously running one.
#[cfg(feature = "csr")]
pub fn start(chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    let timer = gloo_timers::callback::Interval::new(POLL_INTERVAL_MS, move || {
        leptos::task::spawn_local(tick(chat, session));
    });
    // Replacing the slot drops (cancels) the previous timer, if any.
    POLL_TIMER.with(|slot| *slot.borrow_mut() = Some(timer));
}

/// Cancel the running poll loop, if any.
#[cfg(feature = "csr")]
pub fn stop() {
    POLL_TIMER.with(|slot| slot.borrow_mut().take());
}

#[cfg(not(feature = "csr"))]
pub fn start(_chat: RwSignal<ChatState>, _session: RwSignal<SessionState>) {}

#[cfg(not(feature = "csr"))]
pub fn stop() {}

/// One poll tick: fetch pending events and apply them in arrival order.
#[cfg(feature = "csr")]
async fn tick(chat: RwSignal<ChatState>, session: RwSignal<SessionState>) {
    use crate::net::dispatch::{EventOutcome, apply_events};

    let batch = match crate::net::api::poll().await {
        Ok(batch) => batch,
        Err(error) => {
            leptos::logging::warn!("poll failed: {error}");
            return;
        }
    };
    if batch.is_empty() {
        return;
    }

    let mut outcome = EventOutcome::Applied;
    chat.update(|c| {
        session.update(|s| {
            outcome = apply_events(c, s, batch);
        });
    });

    if let EventOutcome::ForcedDisconnect(payload) = outcome {
        crate::net::connection::forced_reset(&payload, chat, session);
    }
}
