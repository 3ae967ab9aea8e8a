//! Reusable view components for the chat mode.

pub mod chat_panel;
pub mod command_strip;
pub mod status_bar;
