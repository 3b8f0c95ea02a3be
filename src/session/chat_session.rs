//! Chat session
//!
//! Owns the ordered message log and the pending flag for one conversation
//! with one agent, and mediates a single outstanding request to the chat
//! service at a time.

use crate::services::{ChatReply, ChatService};
use crate::session::export::{ExportedMessage, HistoryExport};
use crate::session::models::{Message, MessageRole};
use crate::session::reporter::ErrorReporter;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Placeholder substituted when the service reply carries no text
pub const EMPTY_REPLY_FALLBACK: &str = "The agent returned an empty response.";

/// Outcome of a `submit` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty/whitespace-only, or a request was already in flight.
    /// The log is unchanged; rejected submissions are dropped, not queued.
    Rejected,
    /// Round trip completed and an assistant reply was appended
    Replied,
    /// The service call failed; the user message stays, no reply was appended
    Failed,
}

/// Mutable session state, guarded as a unit so the pending check-and-set
/// is atomic with the user-message append
struct SessionState {
    messages: Vec<Message>,
    pending: bool,
    next_message_id: u64,
    updated_at: i64,
}

impl SessionState {
    fn append(&mut self, role: MessageRole, content: String) {
        let message = Message::new(self.next_message_id, role, content);
        self.next_message_id += 1;
        self.updated_at = Utc::now().timestamp();
        self.messages.push(message);
    }
}

/// A single chat conversation against one agent
///
/// Created empty at session start and dropped when the owning view goes
/// away; nothing is persisted. The chat service and error reporter are
/// injected at construction.
pub struct ChatSession {
    /// Session unique identifier
    id: String,
    /// ID of the agent this session talks to
    agent_id: String,
    /// Name of the agent this session talks to
    agent_name: String,
    /// When the session was created (Unix timestamp)
    started_at: i64,
    /// Message log and request state
    state: RwLock<SessionState>,
    /// Service answering submitted messages
    service: Arc<dyn ChatService>,
    /// Sink for service failures
    reporter: Arc<dyn ErrorReporter>,
}

impl ChatSession {
    /// Create a new empty session
    pub fn new(
        id: String,
        agent_id: String,
        agent_name: String,
        service: Arc<dyn ChatService>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id,
            agent_id,
            agent_name,
            started_at: now,
            state: RwLock::new(SessionState {
                messages: Vec::new(),
                pending: false,
                next_message_id: 1,
                updated_at: now,
            }),
            service,
            reporter,
        }
    }

    /// Get the session ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the ID of the agent this session talks to
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Get the name of the agent this session talks to
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// When the session was created (Unix timestamp)
    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    /// When a message was last appended (Unix timestamp)
    pub async fn updated_at(&self) -> i64 {
        self.state.read().await.updated_at
    }

    /// Whether a request to the chat service is currently outstanding
    pub async fn pending(&self) -> bool {
        self.state.read().await.pending
    }

    /// Snapshot of the message log in creation order
    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    /// Look up a single message by ID
    pub async fn message(&self, message_id: u64) -> Option<Message> {
        let state = self.state.read().await;
        state.messages.iter().find(|m| m.id == message_id).cloned()
    }

    /// Submit a message to the agent
    ///
    /// Empty/whitespace-only input and submissions made while a request is
    /// outstanding are dropped without touching the log. An accepted
    /// submission appends the user message verbatim, then performs exactly
    /// one service round trip: on success the assistant reply is appended
    /// (with a fixed placeholder when the payload is empty), on failure the
    /// error goes to the reporter and the log keeps only the user message.
    /// Either way `pending` ends false.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        {
            let mut state = self.state.write().await;
            if state.pending {
                debug!(session_id = %self.id, "Submission dropped: request already in flight");
                return SubmitOutcome::Rejected;
            }
            if text.trim().is_empty() {
                debug!(session_id = %self.id, "Submission dropped: empty input");
                return SubmitOutcome::Rejected;
            }

            state.append(MessageRole::User, text.to_string());
            state.pending = true;
        }

        let result = self.service.send_message(text).await;

        let mut state = self.state.write().await;
        state.pending = false;

        match result {
            Ok(reply) => {
                state.append(MessageRole::Assistant, reply_content(reply));
                debug!(
                    session_id = %self.id,
                    message_count = state.messages.len(),
                    "Assistant reply appended"
                );
                SubmitOutcome::Replied
            }
            Err(error) => {
                self.reporter.report(&self.id, &error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Produce a serializable snapshot of the conversation
    ///
    /// Pure: repeated calls with no intervening submissions yield identical
    /// documents.
    pub async fn export_history(&self) -> HistoryExport {
        let state = self.state.read().await;
        HistoryExport {
            session_id: self.id.clone(),
            agent_id: self.agent_id.clone(),
            agent_name: self.agent_name.clone(),
            started_at: self.started_at,
            updated_at: state.updated_at,
            messages: state
                .messages
                .iter()
                .map(|m| ExportedMessage {
                    role: m.role.as_str().to_string(),
                    content: m.content.clone(),
                })
                .collect(),
        }
    }
}

/// Extract reply text, substituting the placeholder for a missing or
/// empty payload
fn reply_content(reply: ChatReply) -> String {
    match reply.text {
        Some(text) if !text.trim().is_empty() => text,
        _ => EMPTY_REPLY_FALLBACK.to_string(),
    }
}
