//! Top-level pages: the login mode and the chat mode.

pub mod chat;
pub mod login;
