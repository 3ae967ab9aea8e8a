//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`) so components can depend on
//! small focused models. Both are plain values held in `RwSignal` contexts;
//! everything here is native-testable without a browser.

pub mod chat;
pub mod session;
