//! Agent directory API handlers
//!
//! Contains HTTP request handlers for agent CRUD and activation toggling.
//! All data comes from the injected directory service.

use crate::api::utils::{require_agent, RouterState};
use crate::error::AppError;
use crate::state::{Agent, AgentId, AgentKind};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};

/// Agent response type
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    /// Unique identifier for the agent
    pub id: AgentId,
    /// Human-readable name of the agent
    pub name: String,
    /// Description of what the agent does
    pub description: String,
    /// Category the agent is grouped under
    pub category: String,
    /// Capabilities advertised by the agent
    pub capabilities: Vec<String>,
    /// Whether the agent is currently active
    pub is_active: bool,
    /// How the agent is backed (prompt or openapi)
    pub kind: AgentKind,
    /// Optional icon URL
    pub icon: Option<String>,
}

impl From<&Agent> for AgentResponse {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id.clone(),
            name: agent.name.clone(),
            description: agent.description.clone(),
            category: agent.category.clone(),
            capabilities: agent.capabilities.clone(),
            is_active: agent.is_active,
            kind: agent.kind,
            icon: agent.icon.clone(),
        }
    }
}

/// Agents list response
#[derive(Serialize)]
pub struct AgentsListResponse {
    /// List of all agents
    pub agents: Vec<AgentResponse>,
    /// Total number of agents
    pub count: usize,
}

/// Message response
#[derive(Serialize)]
pub struct MessageResponse {
    /// Human-readable message
    pub message: String,
    /// Status indicator (e.g., "ok", "error")
    pub status: String,
}

/// Create agent request
#[derive(Deserialize)]
pub struct CreateAgentRequest {
    /// Name for the new agent
    pub name: String,
    /// Description of what the agent does
    pub description: String,
    /// Category the agent is grouped under
    pub category: String,
    /// Capabilities advertised by the agent
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// How the agent is backed
    pub kind: AgentKind,
    /// Optional icon URL
    #[serde(default)]
    pub icon: Option<String>,
}

/// Update agent request
#[derive(Deserialize)]
pub struct UpdateAgentRequest {
    /// New name for the agent (optional)
    pub name: Option<String>,
    /// New description (optional)
    pub description: Option<String>,
    /// New category (optional)
    pub category: Option<String>,
    /// New capabilities (optional)
    pub capabilities: Option<Vec<String>>,
    /// New backing kind (optional)
    pub kind: Option<AgentKind>,
    /// New icon URL (optional)
    pub icon: Option<String>,
}

/// GET /api/agents - List all agents
pub async fn list_agents(
    State((directory, _, _)): State<RouterState>,
) -> Result<Json<AgentsListResponse>, AppError> {
    let agents: Vec<AgentResponse> = directory
        .list_agents()
        .await?
        .iter()
        .map(AgentResponse::from)
        .collect();

    Ok(Json(AgentsListResponse {
        count: agents.len(),
        agents,
    }))
}

/// GET /api/agents/:id - Get a specific agent
pub async fn get_agent(
    State((directory, _, _)): State<RouterState>,
    Path(id): Path<AgentId>,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = require_agent(&directory, &id).await?;
    Ok(Json(AgentResponse::from(&agent)))
}

/// POST /api/agents - Register a new agent
pub async fn create_agent(
    State((directory, _, _)): State<RouterState>,
    Json(request): Json<CreateAgentRequest>,
) -> Result<(StatusCode, Json<AgentResponse>), AppError> {
    let agent = Agent {
        id: Agent::generate_id(),
        name: request.name,
        description: request.description,
        category: request.category,
        capabilities: request.capabilities,
        is_active: true,
        kind: request.kind,
        icon: request.icon,
    };

    // Validate agent
    agent.validate().map_err(AppError::InvalidAgentConfig)?;

    let created = directory.create_agent(agent).await?;

    Ok((StatusCode::CREATED, Json(AgentResponse::from(&created))))
}

/// PUT /api/agents/:id - Update an agent
pub async fn update_agent(
    State((directory, _, _)): State<RouterState>,
    Path(id): Path<AgentId>,
    Json(request): Json<UpdateAgentRequest>,
) -> Result<Json<AgentResponse>, AppError> {
    let mut agent = require_agent(&directory, &id).await?;

    if let Some(name) = request.name {
        agent.name = name;
    }
    if let Some(description) = request.description {
        agent.description = description;
    }
    if let Some(category) = request.category {
        agent.category = category;
    }
    if let Some(capabilities) = request.capabilities {
        agent.capabilities = capabilities;
    }
    if let Some(kind) = request.kind {
        agent.kind = kind;
    }
    if let Some(icon) = request.icon {
        agent.icon = Some(icon);
    }

    // Validate updated agent
    agent.validate().map_err(AppError::InvalidAgentConfig)?;

    let stored = directory
        .update_agent(agent)
        .await?
        .ok_or_else(|| AppError::AgentNotFound(id))?;

    Ok(Json(AgentResponse::from(&stored)))
}

/// DELETE /api/agents/:id - Delete an agent
pub async fn delete_agent(
    State((directory, _, _)): State<RouterState>,
    Path(id): Path<AgentId>,
) -> Result<Json<MessageResponse>, AppError> {
    if !directory.delete_agent(&id).await? {
        return Err(AppError::AgentNotFound(id));
    }

    Ok(Json(MessageResponse {
        message: "Agent deleted successfully".to_string(),
        status: "ok".to_string(),
    }))
}

/// POST /api/agents/:id/activate - Mark an agent active
pub async fn activate_agent(
    State((directory, _, _)): State<RouterState>,
    Path(id): Path<AgentId>,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = directory
        .set_agent_active(&id, true)
        .await?
        .ok_or_else(|| AppError::AgentNotFound(id))?;

    Ok(Json(AgentResponse::from(&agent)))
}

/// POST /api/agents/:id/deactivate - Mark an agent inactive
pub async fn deactivate_agent(
    State((directory, _, _)): State<RouterState>,
    Path(id): Path<AgentId>,
) -> Result<Json<AgentResponse>, AppError> {
    let agent = directory
        .set_agent_active(&id, false)
        .await?
        .ok_or_else(|| AppError::AgentNotFound(id))?;

    Ok(Json(AgentResponse::from(&agent)))
}
