//! Session Manager
//!
//! Owns the live chat sessions, one per session ID. Sessions are created on
//! demand against an agent and dropped when removed; the chat service and
//! error reporter are injected once at manager construction and shared by
//! every session.

use crate::services::ChatService;
use crate::session::reporter::ErrorReporter;
use crate::session::chat_session::ChatSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Manages live chat sessions keyed by session ID
pub struct SessionManager {
    /// Map from session_id to ChatSession
    sessions: RwLock<HashMap<String, Arc<ChatSession>>>,
    /// Service answering submitted messages
    service: Arc<dyn ChatService>,
    /// Sink for service failures
    reporter: Arc<dyn ErrorReporter>,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(service: Arc<dyn ChatService>, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            service,
            reporter,
        }
    }

    /// Create and store a new session against an agent
    ///
    /// # Arguments
    /// * `agent_id` - ID of the agent the session talks to
    /// * `agent_name` - Display name of that agent (kept for export metadata)
    pub async fn create_session(&self, agent_id: &str, agent_name: &str) -> Arc<ChatSession> {
        let id = Uuid::new_v4().to_string();
        let session = Arc::new(ChatSession::new(
            id.clone(),
            agent_id.to_string(),
            agent_name.to_string(),
            self.service.clone(),
            self.reporter.clone(),
        ));

        let mut sessions = self.sessions.write().await;
        sessions.insert(id.clone(), session.clone());

        info!(
            session_id = %id,
            agent_id = %agent_id,
            "Chat session created"
        );

        session
    }

    /// Look up a session by ID
    pub async fn get(&self, id: &str) -> Option<Arc<ChatSession>> {
        let sessions = self.sessions.read().await;
        sessions.get(id).cloned()
    }

    /// List all live sessions
    pub async fn list(&self) -> Vec<Arc<ChatSession>> {
        let sessions = self.sessions.read().await;
        let mut list: Vec<Arc<ChatSession>> = sessions.values().cloned().collect();
        list.sort_by(|a, b| a.started_at().cmp(&b.started_at()).then_with(|| a.id().cmp(b.id())));
        list
    }

    /// Remove a session
    ///
    /// The session's state is dropped with the last handle; an in-flight
    /// service response resolves into that final handle without effect.
    /// Returns the removed session if it existed.
    pub async fn remove(&self, id: &str) -> Option<Arc<ChatSession>> {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(id);
        if removed.is_some() {
            debug!(session_id = %id, "Chat session removed");
        }
        removed
    }

    /// Get the number of live sessions
    pub async fn session_count(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.len()
    }
}
