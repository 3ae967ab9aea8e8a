//! # client
//!
//! Leptos + WASM browser front end for the Parley chat backend.
//!
//! The backend is reached exclusively through request/response HTTP calls
//! plus a fixed-interval poll loop; there is no persistent connection. This
//! crate contains the session and message-store state, the event
//! classifier, the poll loop, and the pages/components that project the
//! store into the DOM. Browser-only effects are gated behind the `csr`
//! feature so the state and classifier logic stays natively testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
