//! Canonical message store for the chat view.
//!
//! DESIGN
//! ======
//! The store is the source of truth; the rendered list is a pure projection
//! of it. Messages are kept in insertion order and keyed by `id`: a later
//! event referencing an existing id mutates that entry in place instead of
//! appending a duplicate. Optimistic local echoes get their own `local-<n>`
//! ids and are never reconciled with the server's id for the same logical
//! message.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use events::is_server_notice;

/// Fixed id of the local welcome notice appended on connect.
pub const WELCOME_NOTICE_ID: &str = "sys-login";
/// Fixed id of the send-failure notice; repeated failures update it in place.
pub const SEND_ERROR_NOTICE_ID: &str = "sys-err";
/// Fixed id of the synthetic notice installed by a bulk clear.
pub const CLEAR_NOTICE_ID: &str = "sys-clear";

/// Body installed in place of a message removed by an admin.
pub const REMOVED_PLACEHOLDER: &str = "<i>Removed by admin</i>";
/// Prefix attached to optimistic local echoes.
pub const LOCAL_ECHO_PREFIX: &str = "\u{1f4ac} You: ";
/// Leading sentinel marking outgoing text as a backend command.
pub const COMMAND_SENTINEL: char = '/';

/// Visual classification derived from a message prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleTag {
    /// Regular user message.
    #[default]
    Normal,
    /// System/role message, rendered with server styling.
    ServerNotice,
}

/// Classify a prefix into a style tag.
#[must_use]
pub fn classify(prefix: Option<&str>) -> StyleTag {
    match prefix {
        Some(prefix) if is_server_notice(prefix) => StyleTag::ServerNotice,
        _ => StyleTag::Normal,
    }
}

/// A single displayable chat entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Unique among currently rendered messages.
    pub id: String,
    /// Short sender label (name, icon, role marker).
    pub prefix: Option<String>,
    /// Message body, may contain simple markup.
    pub payload: String,
    /// Derived styling, computed from the prefix at construction.
    pub style: StyleTag,
    /// Set when an admin removed this message; the slot is preserved.
    pub deleted: bool,
}

impl Message {
    /// Build a message, deriving its style from the prefix.
    #[must_use]
    pub fn new(id: String, prefix: Option<String>, payload: String) -> Self {
        let style = classify(prefix.as_deref());
        Self {
            id,
            prefix,
            payload,
            style,
            deleted: false,
        }
    }

    /// Build a message with server-notice styling regardless of prefix.
    #[must_use]
    pub fn server_notice(id: String, prefix: Option<String>, payload: String) -> Self {
        Self {
            style: StyleTag::ServerNotice,
            ..Self::new(id, prefix, payload)
        }
    }
}

/// Insertion-ordered message store keyed by message id.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Messages in insertion order; the view renders this directly.
    pub messages: Vec<Message>,
    /// Counter behind `local-<n>` optimistic ids.
    local_seq: u64,
}

impl ChatState {
    /// Insert or update by id: an existing id is replaced in place
    /// (position unchanged), a new id is appended at the end.
    pub fn upsert(&mut self, message: Message) {
        if let Some(existing) = self.messages.iter_mut().find(|m| m.id == message.id) {
            *existing = message;
        } else {
            self.messages.push(message);
        }
    }

    /// Mark `id` as removed: the body becomes [`REMOVED_PLACEHOLDER`] and the
    /// entry keeps its position. Unknown ids are a no-op.
    pub fn mark_deleted(&mut self, id: &str) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.payload = REMOVED_PLACEHOLDER.to_owned();
            message.deleted = true;
        }
    }

    /// Discard the whole history and install the single synthetic clear
    /// notice in its place.
    pub fn clear_all(&mut self) {
        self.messages.clear();
        self.messages.push(Message::server_notice(
            CLEAR_NOTICE_ID.to_owned(),
            Some("\u{1f4e2} ".to_owned()),
            "Chat cleared by an administrator.".to_owned(),
        ));
    }

    /// Append the optimistic local echo for an outgoing message and return
    /// its synthesized id.
    pub fn push_local_echo(&mut self, text: &str) -> String {
        self.local_seq += 1;
        let id = format!("local-{}", self.local_seq);
        self.upsert(Message::new(
            id.clone(),
            Some(LOCAL_ECHO_PREFIX.to_owned()),
            text.to_owned(),
        ));
        id
    }

    /// Append the local welcome notice for `username`.
    pub fn push_welcome(&mut self, username: &str) {
        self.upsert(Message::new(
            WELCOME_NOTICE_ID.to_owned(),
            Some("\u{2705} ".to_owned()),
            format!("Connected as {username}"),
        ));
    }

    /// Append the send-failure notice. The fixed id means a repeated failure
    /// updates the earlier notice in place rather than stacking copies.
    pub fn push_send_error(&mut self) {
        self.upsert(Message::new(
            SEND_ERROR_NOTICE_ID.to_owned(),
            Some("\u{274c} ".to_owned()),
            "Could not send message (backend down?)".to_owned(),
        ));
    }

    /// Drop every message and restart the optimistic-id counter, without
    /// installing any notice. Used on connect and on session reset.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.local_seq = 0;
    }
}

/// Whether outgoing text names a backend command rather than a chat message.
#[must_use]
pub fn is_command(text: &str) -> bool {
    text.starts_with(COMMAND_SENTINEL)
}
