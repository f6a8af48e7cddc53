use super::*;
use chat::Submission;
use serde_json::json;

// =============================================================
// Helpers
// =============================================================

fn linked_state() -> ChatState {
    let mut conversation = Conversation::new("session_1_test", 11);
    conversation.configure_endpoint("https://hooks.test/chat");
    ChatState::new(conversation, 1_000.0)
}

fn send(state: &mut ChatState, text: &str, now_ms: f64) -> Submission {
    let stamp = state.stamp(now_ms, "2026-10-18T00:00:00.000Z".to_owned());
    state.conversation.submit(text, &stamp)
}

// =============================================================
// Defaults and clock
// =============================================================

#[test]
fn chat_state_default_is_empty_and_offline() {
    let state = ChatState::default();
    assert!(state.conversation.transcript().is_empty());
    assert!(!state.reveal_running);
    assert_eq!(state.link_label(), "WEBHOOK: OFFLINE");
}

#[test]
fn elapsed_is_relative_to_mount() {
    let state = linked_state();
    assert_eq!(state.elapsed(4_500.0), Duration::from_millis(3_500));
}

#[test]
fn elapsed_clamps_backwards_clock() {
    let state = linked_state();
    assert_eq!(state.elapsed(0.0), Duration::ZERO);
}

#[test]
fn stamp_carries_elapsed_and_iso_time() {
    let state = linked_state();
    let stamp = state.stamp(62_000.0, "iso".to_owned());
    assert_eq!(stamp.elapsed, Duration::from_secs(61));
    assert_eq!(stamp.iso8601, "iso");
}

#[test]
fn link_label_reflects_endpoint() {
    assert_eq!(linked_state().link_label(), "WEBHOOK: LINKED");
}

// =============================================================
// Exchange lifecycle
// =============================================================

#[test]
fn typing_since_only_while_pending() {
    let mut state = linked_state();
    assert_eq!(state.typing_since(), None);
    send(&mut state, "ping", 3_000.0);
    assert_eq!(state.typing_since().as_deref(), Some("00:00:02"));
    state.resolve(Ok(json!({ "text": "pong" })), 4_000.0);
    assert_eq!(state.typing_since(), None);
}

#[test]
fn resolve_bot_reply_starts_one_reveal_loop() {
    let mut state = linked_state();
    send(&mut state, "a", 2_000.0);
    assert!(state.resolve(Ok(json!({ "text": "ab" })), 2_100.0));
    assert!(state.reveal_running);

    // A second reply while the loop runs joins the existing loop.
    send(&mut state, "b", 2_200.0);
    assert!(!state.resolve(Ok(json!({ "text": "cd" })), 2_300.0));
}

#[test]
fn resolve_error_does_not_start_reveal() {
    let mut state = linked_state();
    send(&mut state, "a", 2_000.0);
    assert!(!state.resolve(Err(ChatError::Http { status: 502 }), 2_100.0));
    assert!(!state.reveal_running);
}

#[test]
fn reveal_tick_releases_guard_when_done() {
    let mut state = linked_state();
    send(&mut state, "a", 2_000.0);
    state.resolve(Ok(json!({ "text": "ok" })), 2_100.0);
    assert!(state.reveal_tick());
    assert!(!state.reveal_tick());
    assert!(!state.reveal_running);
    assert_eq!(state.conversation.transcript().last().unwrap().visible_text(), "ok");
}

#[test]
fn unconfigured_submission_fails_without_pending() {
    let mut state = ChatState::default();
    let outcome = send(&mut state, "hello?", 10.0);
    assert_eq!(outcome, Submission::Failed(ChatError::ConfigurationMissing));
    assert!(state.typing_since().is_none());
    assert_eq!(state.conversation.transcript().len(), 2);
}
