use super::*;
use crate::state::chat::{CLEAR_NOTICE_ID, REMOVED_PLACEHOLDER, StyleTag};
use events::decode_events;

fn chat_event(id: &str, prefix: &str, payload: &str) -> ServerEvent {
    ServerEvent::Chat {
        id: Some(id.to_owned()),
        prefix: Some(prefix.to_owned()),
        payload: payload.to_owned(),
    }
}

// =============================================================
// status events
// =============================================================

#[test]
fn status_updates_readout_last_write_wins() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();

    let first = apply_event(
        &mut chat,
        &mut session,
        ServerEvent::Status { payload: "Conectando...".to_owned() },
    );
    let second = apply_event(
        &mut chat,
        &mut session,
        ServerEvent::Status { payload: "En sala: general".to_owned() },
    );

    assert_eq!(first, EventOutcome::Applied);
    assert_eq!(second, EventOutcome::Applied);
    assert_eq!(session.status_line.as_deref(), Some("En sala: general"));
    // Status text is a readout, never history.
    assert!(chat.messages.is_empty());
}

#[test]
fn status_with_disconnect_marker_demands_reset() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();
    session.mark_connected("alice");

    let outcome = apply_event(
        &mut chat,
        &mut session,
        ServerEvent::Status { payload: "Desconectado: timeout".to_owned() },
    );

    assert_eq!(
        outcome,
        EventOutcome::ForcedDisconnect("Desconectado: timeout".to_owned())
    );
    // The reset itself belongs to the effect shell; state is untouched here.
    assert!(session.is_connected());
}

// =============================================================
// chat events
// =============================================================

#[test]
fn chat_event_upserts_by_id() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();

    apply_event(&mut chat, &mut session, chat_event("m1", "Bob: ", "hi"));

    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].id, "m1");
    assert_eq!(chat.messages[0].payload, "hi");
    assert_eq!(chat.messages[0].style, StyleTag::Normal);
}

#[test]
fn repeated_chat_event_does_not_duplicate() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();

    apply_event(&mut chat, &mut session, chat_event("m1", "Bob: ", "hi"));
    apply_event(&mut chat, &mut session, chat_event("m1", "Bob: ", "hi"));

    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn chat_event_without_id_gets_synthesized_identity() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();

    apply_event(
        &mut chat,
        &mut session,
        ServerEvent::Chat { id: None, prefix: None, payload: "hello".to_owned() },
    );
    apply_event(
        &mut chat,
        &mut session,
        ServerEvent::Chat { id: None, prefix: None, payload: "hello".to_owned() },
    );

    // Without server identity the two events are distinct messages.
    assert_eq!(chat.messages.len(), 2);
    assert!(chat.messages[0].id.starts_with("msg-"));
    assert_ne!(chat.messages[0].id, chat.messages[1].id);
}

#[test]
fn server_prefixed_chat_event_is_styled_as_notice() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();

    apply_event(
        &mut chat,
        &mut session,
        chat_event("m1", "\u{26d4} Servidor: ", "user kicked"),
    );

    assert_eq!(chat.messages[0].style, StyleTag::ServerNotice);
}

// =============================================================
// clear / delete events
// =============================================================

#[test]
fn clear_then_chats_rebuild_in_order_after_notice() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();
    apply_event(&mut chat, &mut session, chat_event("m1", "Bob: ", "old"));

    let batch = vec![
        ServerEvent::Clear,
        chat_event("m2", "Ana: ", "fresh"),
        chat_event("m3", "Bob: ", "start"),
    ];
    let outcome = apply_events(&mut chat, &mut session, batch);

    assert_eq!(outcome, EventOutcome::Applied);
    let ids: Vec<&str> = chat.messages.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec![CLEAR_NOTICE_ID, "m2", "m3"]);
}

#[test]
fn delete_replaces_payload_and_keeps_count() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();
    apply_event(&mut chat, &mut session, chat_event("m1", "Bob: ", "hi"));

    apply_event(&mut chat, &mut session, ServerEvent::Delete { id: "m1".to_owned() });

    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].payload, REMOVED_PLACEHOLDER);
    assert!(chat.messages[0].deleted);
}

#[test]
fn delete_unknown_id_is_noop() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();
    apply_event(&mut chat, &mut session, chat_event("m1", "Bob: ", "hi"));

    let outcome = apply_event(&mut chat, &mut session, ServerEvent::Delete { id: "m9".to_owned() });

    assert_eq!(outcome, EventOutcome::Applied);
    assert_eq!(chat.messages.len(), 1);
    assert_eq!(chat.messages[0].payload, "hi");
}

// =============================================================
// batch application
// =============================================================

#[test]
fn batch_applies_in_array_order() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();

    let body = serde_json::json!([
        {"type": "chat", "id": "m1", "prefix": "Bob: ", "payload": "hi"},
        {"type": "chat", "id": "m2", "prefix": "Ana: ", "payload": "hey"},
        {"type": "delete", "id": "m1"}
    ]);
    let outcome = apply_events(&mut chat, &mut session, decode_events(&body).expect("decode"));

    assert_eq!(outcome, EventOutcome::Applied);
    assert_eq!(chat.messages.len(), 2);
    assert!(chat.messages[0].deleted);
    assert!(!chat.messages[1].deleted);
}

#[test]
fn batch_stops_at_forced_disconnect() {
    let mut chat = ChatState::default();
    let mut session = SessionState::default();

    let batch = vec![
        chat_event("m1", "Bob: ", "hi"),
        ServerEvent::Status { payload: "\u{1f534} Desconectado".to_owned() },
        chat_event("m2", "Ana: ", "never applied"),
    ];
    let outcome = apply_events(&mut chat, &mut session, batch);

    assert!(matches!(outcome, EventOutcome::ForcedDisconnect(_)));
    assert_eq!(chat.messages.len(), 1);
}

// =============================================================
// id synthesis
// =============================================================

#[test]
fn synthesized_ids_use_message_namespace() {
    let id = synthesize_message_id();
    assert!(id.starts_with("msg-"));
    assert_ne!(id, synthesize_message_id());
}
