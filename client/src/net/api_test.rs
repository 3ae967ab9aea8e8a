use super::*;

#[test]
fn unreachable_backend_message_is_user_facing() {
    assert_eq!(unreachable_backend_message(), "Could not reach the chat backend.");
}

#[test]
fn poll_failed_message_formats_status() {
    assert_eq!(poll_failed_message(502), "poll request failed: 502");
}
