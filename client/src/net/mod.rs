//! Networking layer: HTTP calls, the poll loop, and event application.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend exposes four request/response endpoints (`/connect`,
//! `/disconnect`, `/send`, `/poll`); there is no push channel. `poll` drives
//! everything server-originated: a fixed 500 ms timer fetches pending events
//! and `dispatch` applies them to the store in arrival order.

pub mod api;
pub mod composer;
pub mod connection;
pub mod dispatch;
pub mod poll;
