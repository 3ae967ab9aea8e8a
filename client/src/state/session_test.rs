use super::*;

// =============================================================
// ConnectionStatus
// =============================================================

#[test]
fn connection_status_default_is_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_default_has_no_identity() {
    let session = SessionState::default();
    assert!(session.username.is_none());
    assert!(session.status_line.is_none());
    assert!(session.error.is_none());
    assert!(!session.is_connected());
}

#[test]
fn mark_connected_records_username_and_clears_error() {
    let mut session = SessionState {
        error: Some("old error".to_owned()),
        ..SessionState::default()
    };

    session.mark_connected("alice");

    assert!(session.is_connected());
    assert_eq!(session.username.as_deref(), Some("alice"));
    assert!(session.error.is_none());
}

#[test]
fn reset_returns_to_login_capable_state() {
    let mut session = SessionState::default();
    session.mark_connected("alice");
    session.status_line = Some("Conectando...".to_owned());

    session.reset();

    assert!(!session.is_connected());
    assert!(session.username.is_none());
    assert!(session.status_line.is_none());
}
