//! Append-only projection of the event stream onto terminal lines.
//!
//! DESIGN
//! ======
//! A terminal cannot mutate already-printed lines, so id-keyed mutation is
//! projected as follow-up lines: a repeated id prints as an edit, a delete
//! prints a removal line, a clear prints the clear notice and forgets all
//! known ids. Identity semantics stay intact even though the medium is
//! append-only.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use std::collections::HashSet;

use events::ServerEvent;

/// Prefix attached to optimistic local echoes.
pub const LOCAL_ECHO_PREFIX: &str = "\u{1f4ac} You: ";

/// Optimistic echo line for outgoing text.
///
/// Commands (leading `/`) and empty input get none: commands are answered
/// through the poll channel if at all.
#[must_use]
pub fn compose_echo(text: &str) -> Option<String> {
    if text.is_empty() || text.starts_with('/') {
        return None;
    }
    Some(format!("{LOCAL_ECHO_PREFIX}{text}"))
}

/// Terminal projection state: which server ids have been printed.
#[derive(Debug, Default)]
pub struct Screen {
    seen: HashSet<String>,
}

impl Screen {
    /// Apply one (non-forced-disconnect) event, returning the lines to
    /// print in order. Events that change nothing return no lines.
    pub fn apply(&mut self, event: &ServerEvent) -> Vec<String> {
        match event {
            ServerEvent::Status { payload } => vec![format!("\u{2014} {payload}")],
            ServerEvent::Chat { id, prefix, payload } => {
                let prefix = prefix.as_deref().unwrap_or_default();
                let edited = match id {
                    Some(id) => !self.seen.insert(id.clone()),
                    None => false,
                };
                if edited {
                    vec![format!("{prefix}{payload} (edited)")]
                } else {
                    vec![format!("{prefix}{payload}")]
                }
            }
            ServerEvent::Clear => {
                self.seen.clear();
                vec!["\u{1f4e2} Chat cleared by an administrator.".to_owned()]
            }
            ServerEvent::Delete { id } => {
                if self.seen.contains(id) {
                    vec!["\u{1f5d1}\u{fe0f} A message was removed by an admin.".to_owned()]
                } else {
                    Vec::new()
                }
            }
        }
    }
}
