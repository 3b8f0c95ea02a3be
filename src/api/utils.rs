//! API utility functions
//!
//! Shared state type and lookup helpers used by API handlers.

use crate::config::Config;
use crate::error::AppError;
use crate::services::AgentDirectory;
use crate::session::{ChatSession, SessionManager};
use crate::state::Agent;
use std::sync::Arc;

/// Shared state threaded through every route
pub type RouterState = (Arc<dyn AgentDirectory>, Arc<SessionManager>, Arc<Config>);

/// Look up an agent in the directory or fail with 404
pub async fn require_agent(
    directory: &Arc<dyn AgentDirectory>,
    id: &str,
) -> Result<Agent, AppError> {
    directory
        .get_agent(id)
        .await?
        .ok_or_else(|| AppError::AgentNotFound(id.to_string()))
}

/// Look up a live session or fail with 404
pub async fn require_session(
    manager: &SessionManager,
    id: &str,
) -> Result<Arc<ChatSession>, AppError> {
    manager
        .get(id)
        .await
        .ok_or_else(|| AppError::SessionNotFound(id.to_string()))
}
