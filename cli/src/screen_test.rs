use super::*;

fn chat(id: Option<&str>, prefix: &str, payload: &str) -> ServerEvent {
    ServerEvent::Chat {
        id: id.map(ToOwned::to_owned),
        prefix: Some(prefix.to_owned()),
        payload: payload.to_owned(),
    }
}

// =============================================================
// compose_echo
// =============================================================

#[test]
fn echo_for_plain_message() {
    assert_eq!(
        compose_echo("hello").as_deref(),
        Some("\u{1f4ac} You: hello")
    );
}

#[test]
fn no_echo_for_commands_or_empty_input() {
    assert_eq!(compose_echo("/help"), None);
    assert_eq!(compose_echo(""), None);
}

// =============================================================
// Screen::apply
// =============================================================

#[test]
fn status_prints_readout_line() {
    let mut screen = Screen::default();
    let lines = screen.apply(&ServerEvent::Status {
        payload: "En sala: general".to_owned(),
    });
    assert_eq!(lines, vec!["\u{2014} En sala: general".to_owned()]);
}

#[test]
fn chat_prints_prefix_and_payload() {
    let mut screen = Screen::default();
    let lines = screen.apply(&chat(Some("m1"), "Bob: ", "hi"));
    assert_eq!(lines, vec!["Bob: hi".to_owned()]);
}

#[test]
fn repeated_chat_id_prints_as_edit() {
    let mut screen = Screen::default();
    screen.apply(&chat(Some("m1"), "Bob: ", "hi"));
    let lines = screen.apply(&chat(Some("m1"), "Bob: ", "hi there"));
    assert_eq!(lines, vec!["Bob: hi there (edited)".to_owned()]);
}

#[test]
fn chats_without_id_never_count_as_edits() {
    let mut screen = Screen::default();
    screen.apply(&chat(None, "Bob: ", "hi"));
    let lines = screen.apply(&chat(None, "Bob: ", "hi"));
    assert_eq!(lines, vec!["Bob: hi".to_owned()]);
}

#[test]
fn clear_prints_notice_and_forgets_ids() {
    let mut screen = Screen::default();
    screen.apply(&chat(Some("m1"), "Bob: ", "hi"));

    let lines = screen.apply(&ServerEvent::Clear);
    assert_eq!(lines.len(), 1);

    // After a clear the same id is a fresh message, not an edit.
    let lines = screen.apply(&chat(Some("m1"), "Bob: ", "hi"));
    assert_eq!(lines, vec!["Bob: hi".to_owned()]);
}

#[test]
fn delete_known_id_prints_removal_line() {
    let mut screen = Screen::default();
    screen.apply(&chat(Some("m1"), "Bob: ", "hi"));
    let lines = screen.apply(&ServerEvent::Delete { id: "m1".to_owned() });
    assert_eq!(lines.len(), 1);
}

#[test]
fn delete_unknown_id_is_silent_noop() {
    let mut screen = Screen::default();
    let lines = screen.apply(&ServerEvent::Delete { id: "m9".to_owned() });
    assert!(lines.is_empty());
}
