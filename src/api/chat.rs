//! Chat API endpoints
//!
//! Handles HTTP requests for chat sessions: creation, submission, export,
//! disposal, and the SSE reveal stream for a single message.

use crate::api::streaming::create_reveal_sse;
use crate::api::utils::{require_agent, require_session, RouterState};
use crate::error::AppError;
use crate::session::{ChatSession, HistoryExport, Message, SubmitOutcome, TypingRevealer};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Json, Response},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request to create a new chat session
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// ID of the agent to chat with
    pub agent_id: String,
}

/// Request to submit a message
#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    /// Message content
    pub content: String,
}

/// Query parameters for the reveal stream
#[derive(Debug, Deserialize)]
pub struct RevealQuery {
    /// Animate the reveal (default true); false streams the full text at once
    pub typing: Option<bool>,
    /// Delay between characters in milliseconds (default from config)
    pub delay_ms: Option<u64>,
}

/// Session response
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session unique identifier
    pub id: String,
    /// ID of the agent this session talks to
    pub agent_id: String,
    /// Name of the agent this session talks to
    pub agent_name: String,
    /// Unix timestamp when the session was created
    pub started_at: i64,
    /// Unix timestamp when the log last changed
    pub updated_at: i64,
    /// Whether a request to the chat service is outstanding
    pub pending: bool,
}

impl SessionResponse {
    async fn from_session(session: &ChatSession) -> Self {
        Self {
            id: session.id().to_string(),
            agent_id: session.agent_id().to_string(),
            agent_name: session.agent_name().to_string(),
            started_at: session.started_at(),
            updated_at: session.updated_at().await,
            pending: session.pending().await,
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Session-local message identifier
    pub id: u64,
    /// Message role ("user" or "assistant")
    pub role: String,
    /// Message content
    pub content: String,
    /// Unix timestamp when the message was created
    pub created_at: i64,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
            created_at: message.created_at,
        }
    }
}

/// Session with messages response
#[derive(Debug, Serialize)]
pub struct SessionWithMessagesResponse {
    /// The session
    pub session: SessionResponse,
    /// List of messages in the session
    pub messages: Vec<MessageResponse>,
}

/// Submission response
#[derive(Debug, Serialize)]
pub struct SubmitMessageResponse {
    /// Whether the submission was accepted (empty input and submissions
    /// made while a request was in flight are dropped, not errors)
    pub accepted: bool,
    /// Whether a request is still outstanding
    pub pending: bool,
    /// The message log after the submission settled
    pub messages: Vec<MessageResponse>,
}

/// GET /api/chat/sessions - List all live sessions
pub async fn list_sessions(
    State((_, manager, _)): State<RouterState>,
) -> Result<Json<Vec<SessionResponse>>, AppError> {
    let sessions = manager.list().await;

    let mut responses = Vec::with_capacity(sessions.len());
    for session in &sessions {
        responses.push(SessionResponse::from_session(session).await);
    }

    Ok(Json(responses))
}

/// POST /api/chat/sessions - Create a new session against an agent
pub async fn create_session(
    State((directory, manager, _)): State<RouterState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let agent = require_agent(&directory, &request.agent_id).await?;

    let session = manager.create_session(&agent.id, &agent.name).await;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::from_session(&session).await),
    ))
}

/// GET /api/chat/sessions/:id - Get a session with its messages
pub async fn get_session(
    State((_, manager, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<SessionWithMessagesResponse>, AppError> {
    let session = require_session(&manager, &id).await?;

    let messages = session
        .messages()
        .await
        .iter()
        .map(MessageResponse::from)
        .collect();

    Ok(Json(SessionWithMessagesResponse {
        session: SessionResponse::from_session(&session).await,
        messages,
    }))
}

/// POST /api/chat/sessions/:id/messages - Submit a message
///
/// Always responds 200 with the settled log: input rejection is a silent
/// no-op (`accepted == false`), not an HTTP error, and a failed service
/// round trip leaves the log one user message longer with no assistant
/// reply.
pub async fn submit_message(
    State((_, manager, _)): State<RouterState>,
    Path(id): Path<String>,
    Json(request): Json<SubmitMessageRequest>,
) -> Result<Json<SubmitMessageResponse>, AppError> {
    let session = require_session(&manager, &id).await?;

    let outcome = session.submit(&request.content).await;

    let messages = session
        .messages()
        .await
        .iter()
        .map(MessageResponse::from)
        .collect();

    Ok(Json(SubmitMessageResponse {
        accepted: outcome != SubmitOutcome::Rejected,
        pending: session.pending().await,
        messages,
    }))
}

/// GET /api/chat/sessions/:id/export - Export the conversation
pub async fn export_session(
    State((_, manager, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<HistoryExport>, AppError> {
    let session = require_session(&manager, &id).await?;
    Ok(Json(session.export_history().await))
}

/// DELETE /api/chat/sessions/:id - Dispose a session
pub async fn delete_session(
    State((_, manager, _)): State<RouterState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    manager
        .remove(&id)
        .await
        .ok_or_else(|| AppError::SessionNotFound(id.clone()))?;

    Ok(Json(serde_json::json!({
        "message": "Session disposed successfully",
        "id": id
    })))
}

/// GET /api/chat/sessions/:id/messages/:message_id/reveal - Stream the
/// typing reveal of one message as Server-Sent Events
pub async fn reveal_message(
    State((_, manager, config)): State<RouterState>,
    Path((id, message_id)): Path<(String, u64)>,
    Query(query): Query<RevealQuery>,
) -> Result<Response, AppError> {
    let session = require_session(&manager, &id).await?;
    let message = session.message(message_id).await.ok_or_else(|| {
        AppError::MessageNotFound(format!("{} in session {}", message_id, id))
    })?;

    let typing = query.typing.unwrap_or(true);
    let delay = query
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.chat.typing_delay());

    let (revealer, rx) = TypingRevealer::start(&message.content, typing, delay);
    create_reveal_sse(revealer, rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::{AgentDirectory, MockDirectory, MOCK_CHAT_REPLY};
    use crate::session::{SessionManager, TracingReporter};
    use std::sync::Arc;

    fn create_test_state() -> RouterState {
        let directory = Arc::new(MockDirectory::new(Duration::ZERO));
        let manager = Arc::new(SessionManager::new(
            directory.clone(),
            Arc::new(TracingReporter),
        ));
        let config = Arc::new(Config::from_env());
        (directory as Arc<dyn AgentDirectory>, manager, config)
    }

    async fn open_session(state: &RouterState) -> String {
        let request = CreateSessionRequest {
            agent_id: "2".to_string(),
        };
        let (_, response) = create_session(State(state.clone()), Json(request))
            .await
            .unwrap();
        response.id.clone()
    }

    #[tokio::test]
    async fn test_create_session_for_seeded_agent() {
        let state = create_test_state();
        let request = CreateSessionRequest {
            agent_id: "2".to_string(),
        };

        let result = create_session(State(state), Json(request)).await;
        assert!(result.is_ok());
        let (status, response) = result.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.agent_id, "2");
        assert_eq!(response.agent_name, "Chat Bot");
        assert!(!response.pending);
    }

    #[tokio::test]
    async fn test_create_session_unknown_agent() {
        let state = create_test_state();
        let request = CreateSessionRequest {
            agent_id: "nonexistent".to_string(),
        };

        let result = create_session(State(state), Json(request)).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::AgentNotFound(_) => {}
            other => panic!("Expected AgentNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_message_round_trip() {
        let state = create_test_state();
        let id = open_session(&state).await;

        let request = SubmitMessageRequest {
            content: "Hello".to_string(),
        };
        let response = submit_message(State(state.clone()), Path(id.clone()), Json(request))
            .await
            .unwrap();

        assert!(response.accepted);
        assert!(!response.pending);
        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[0].role, "user");
        assert_eq!(response.messages[0].content, "Hello");
        assert_eq!(response.messages[1].role, "assistant");
        assert_eq!(response.messages[1].content, MOCK_CHAT_REPLY);
    }

    #[tokio::test]
    async fn test_submit_whitespace_rejected_without_error() {
        let state = create_test_state();
        let id = open_session(&state).await;

        let request = SubmitMessageRequest {
            content: "   ".to_string(),
        };
        let response = submit_message(State(state), Path(id), Json(request))
            .await
            .unwrap();

        assert!(!response.accepted);
        assert!(response.messages.is_empty());
    }

    #[tokio::test]
    async fn test_get_session_with_messages() {
        let state = create_test_state();
        let id = open_session(&state).await;

        submit_message(
            State(state.clone()),
            Path(id.clone()),
            Json(SubmitMessageRequest {
                content: "Hello".to_string(),
            }),
        )
        .await
        .unwrap();

        let response = get_session(State(state), Path(id.clone())).await.unwrap();
        assert_eq!(response.session.id, id);
        assert_eq!(response.messages.len(), 2);
        assert!(response.messages[0].id < response.messages[1].id);
    }

    #[tokio::test]
    async fn test_get_session_not_found() {
        let state = create_test_state();
        let result = get_session(State(state), Path("nonexistent".to_string())).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::SessionNotFound(_) => {}
            other => panic!("Expected SessionNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_export_session() {
        let state = create_test_state();
        let id = open_session(&state).await;

        submit_message(
            State(state.clone()),
            Path(id.clone()),
            Json(SubmitMessageRequest {
                content: "Hello".to_string(),
            }),
        )
        .await
        .unwrap();

        let export = export_session(State(state), Path(id.clone())).await.unwrap();
        assert_eq!(export.session_id, id);
        assert_eq!(export.agent_name, "Chat Bot");
        assert_eq!(export.messages.len(), 2);
        assert_eq!(export.messages[0].role, "user");
        assert_eq!(export.messages[1].role, "assistant");
    }

    #[tokio::test]
    async fn test_delete_session() {
        let state = create_test_state();
        let id = open_session(&state).await;

        let result = delete_session(State(state.clone()), Path(id.clone())).await;
        assert!(result.is_ok());

        let result = get_session(State(state), Path(id)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_sessions() {
        let state = create_test_state();
        assert!(list_sessions(State(state.clone())).await.unwrap().is_empty());

        open_session(&state).await;
        open_session(&state).await;
        assert_eq!(list_sessions(State(state)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_reveal_unknown_message() {
        let state = create_test_state();
        let id = open_session(&state).await;

        let result = reveal_message(
            State(state),
            Path((id, 42)),
            Query(RevealQuery {
                typing: Some(true),
                delay_ms: Some(1),
            }),
        )
        .await;

        assert!(result.is_err());
        match result.unwrap_err() {
            AppError::MessageNotFound(_) => {}
            other => panic!("Expected MessageNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reveal_existing_message() {
        let state = create_test_state();
        let id = open_session(&state).await;

        submit_message(
            State(state.clone()),
            Path(id.clone()),
            Json(SubmitMessageRequest {
                content: "Hello".to_string(),
            }),
        )
        .await
        .unwrap();

        let result = reveal_message(
            State(state),
            Path((id, 2)),
            Query(RevealQuery {
                typing: Some(false),
                delay_ms: None,
            }),
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().status(), StatusCode::OK);
    }
}
