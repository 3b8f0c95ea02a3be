//! Integration tests for the console end-to-end flow
//!
//! These tests verify the complete path a client walks:
//! 1. Agent discovery through the mocked directory
//! 2. Session creation and chat round trips
//! 3. History export
//! 4. Typing reveal of a stored assistant reply

use agent_console::services::{AgentDirectory, ChatService, MockDirectory, MOCK_CHAT_REPLY};
use agent_console::session::{
    SessionManager, SubmitOutcome, TracingReporter, TypingRevealer, DEFAULT_DELAY_PER_CHAR,
};
use std::sync::Arc;
use std::time::Duration;

/// Helper to create a directory and session manager pair wired the way the
/// server wires them
fn create_console() -> (Arc<MockDirectory>, SessionManager) {
    let directory = Arc::new(MockDirectory::new(Duration::ZERO));
    let chat_service: Arc<dyn ChatService> = directory.clone();
    let manager = SessionManager::new(chat_service, Arc::new(TracingReporter));
    (directory, manager)
}

#[tokio::test]
async fn test_full_chat_flow() {
    let (directory, manager) = create_console();

    // Discover an agent
    let agents = directory.list_agents().await.unwrap();
    assert_eq!(agents.len(), 2);
    let agent = &agents[1];
    assert_eq!(agent.name, "Chat Bot");

    // Open a session and chat
    let session = manager.create_session(&agent.id, &agent.name).await;
    let outcome = session.submit("Hello").await;
    assert_eq!(outcome, SubmitOutcome::Replied);

    let messages = session.messages().await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "Hello");
    assert_eq!(messages[1].content, MOCK_CHAT_REPLY);
    assert!(!session.pending().await);

    // Export preserves order and exact contents
    let export = session.export_history().await;
    assert_eq!(export.agent_name, "Chat Bot");
    assert_eq!(export.messages.len(), 2);
    assert_eq!(export.messages[0].role, "user");
    assert_eq!(export.messages[0].content, "Hello");
    assert_eq!(export.messages[1].role, "assistant");
    assert_eq!(export.messages[1].content, MOCK_CHAT_REPLY);

    // Reveal the assistant reply character by character
    let (_revealer, mut rx) =
        TypingRevealer::start(&messages[1].content, true, Duration::from_millis(1));
    let mut events = Vec::new();
    while let Some(prefix) = rx.recv().await {
        events.push(prefix);
    }
    assert_eq!(events.len(), MOCK_CHAT_REPLY.chars().count() + 1);
    assert_eq!(events.first().unwrap(), "");
    assert_eq!(events.last().unwrap(), MOCK_CHAT_REPLY);
}

#[tokio::test]
async fn test_multiple_submissions_accumulate() {
    let (_, manager) = create_console();
    let session = manager.create_session("2", "Chat Bot").await;

    for i in 0..3 {
        let outcome = session.submit(&format!("message {}", i)).await;
        assert_eq!(outcome, SubmitOutcome::Replied);
    }

    let messages = session.messages().await;
    assert_eq!(messages.len(), 6);
    // Strict creation order
    for pair in messages.windows(2) {
        assert!(pair[0].id < pair[1].id);
        assert!(pair[0].created_at <= pair[1].created_at);
    }
}

#[tokio::test]
async fn test_session_disposal_discards_state() {
    let (_, manager) = create_console();
    let session = manager.create_session("2", "Chat Bot").await;
    session.submit("Hello").await;
    let id = session.id().to_string();
    drop(session);

    assert!(manager.remove(&id).await.is_some());
    assert!(manager.get(&id).await.is_none());
    assert_eq!(manager.session_count().await, 0);
}

#[tokio::test]
async fn test_export_file_round_trip() {
    let (_, manager) = create_console();
    let session = manager.create_session("2", "Chat Bot").await;
    session.submit("Hello").await;

    let export = session.export_history().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat-history.json");
    std::fs::write(&path, export.to_json_pretty().unwrap()).unwrap();

    let loaded: agent_console::session::HistoryExport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded, export);
}

#[tokio::test]
async fn test_immediate_reveal_matches_stored_content() {
    let (_, manager) = create_console();
    let session = manager.create_session("2", "Chat Bot").await;
    session.submit("Hello").await;

    let message = session.message(2).await.unwrap();
    let (revealer, mut rx) = TypingRevealer::start(&message.content, false, DEFAULT_DELAY_PER_CHAR);

    assert_eq!(rx.recv().await.unwrap(), MOCK_CHAT_REPLY);
    assert!(rx.recv().await.is_none());
    assert!(!revealer.is_active().await);
}
