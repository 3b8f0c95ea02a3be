//! Mocked agent directory
//!
//! The console's only data source: an in-memory directory seeded with
//! hardcoded agents, answering chat requests with a canned reply after a
//! configurable artificial delay. Stands in for a remote directory service
//! behind the same trait.

use crate::services::chat::{ChatReply, ChatService, ServiceError};
use crate::state::{Agent, AgentKind, AgentRegistry};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Canned reply returned by the mocked chat service
pub const MOCK_CHAT_REPLY: &str = "This is a mock response from the agent. \
    In a real implementation, this would come from your AI service.";

/// Directory of agent profiles
///
/// Extends the chat seam with agent CRUD. Implementations own the profile
/// data; callers never reach around this interface.
#[async_trait]
pub trait AgentDirectory: ChatService {
    /// List all agents, sorted by name
    async fn list_agents(&self) -> Result<Vec<Agent>, ServiceError>;

    /// Get a single agent by ID
    async fn get_agent(&self, id: &str) -> Result<Option<Agent>, ServiceError>;

    /// Register a new agent
    async fn create_agent(&self, agent: Agent) -> Result<Agent, ServiceError>;

    /// Replace an existing agent (matched by `updated.id`)
    /// Returns the stored agent, or None if no agent carries that ID
    async fn update_agent(&self, updated: Agent) -> Result<Option<Agent>, ServiceError>;

    /// Delete an agent by ID
    /// Returns true if an agent was removed
    async fn delete_agent(&self, id: &str) -> Result<bool, ServiceError>;

    /// Toggle an agent's activation flag
    /// Returns the updated agent, or None if no agent carries that ID
    async fn set_agent_active(&self, id: &str, active: bool)
        -> Result<Option<Agent>, ServiceError>;
}

/// Mocked directory with hardcoded seed data
pub struct MockDirectory {
    /// Backing registry of agent profiles
    registry: RwLock<AgentRegistry>,
    /// Simulated latency for chat replies
    reply_delay: Duration,
}

impl MockDirectory {
    /// Create a directory seeded with the built-in demo agents
    ///
    /// # Arguments
    /// * `reply_delay` - Simulated latency applied to each chat reply
    pub fn new(reply_delay: Duration) -> Self {
        let mut registry = AgentRegistry::new();
        for agent in Self::seed_agents() {
            registry.add(agent);
        }

        info!(agent_count = registry.count(), "Mock directory seeded");

        Self {
            registry: RwLock::new(registry),
            reply_delay,
        }
    }

    /// The hardcoded agents every fresh directory starts with
    fn seed_agents() -> Vec<Agent> {
        vec![
            Agent {
                id: "1".to_string(),
                name: "Analysis Assistant".to_string(),
                description: "Advanced data analysis and visualization agent".to_string(),
                category: "Analysis".to_string(),
                capabilities: vec!["Data Analysis".to_string(), "Visualization".to_string()],
                is_active: true,
                kind: AgentKind::OpenApi,
                icon: None,
            },
            Agent {
                id: "2".to_string(),
                name: "Chat Bot".to_string(),
                description: "Intelligent conversational agent for customer support".to_string(),
                category: "Chat".to_string(),
                capabilities: vec!["Conversation".to_string(), "Support".to_string()],
                is_active: true,
                kind: AgentKind::Prompt,
                icon: None,
            },
        ]
    }
}

#[async_trait]
impl ChatService for MockDirectory {
    async fn send_message(&self, text: &str) -> Result<ChatReply, ServiceError> {
        debug!(text_len = text.len(), "Serving canned chat reply");

        // Simulate the latency of a real round trip
        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }

        Ok(ChatReply {
            text: Some(MOCK_CHAT_REPLY.to_string()),
        })
    }
}

#[async_trait]
impl AgentDirectory for MockDirectory {
    async fn list_agents(&self) -> Result<Vec<Agent>, ServiceError> {
        let registry = self.registry.read().await;
        Ok(registry.list().into_iter().cloned().collect())
    }

    async fn get_agent(&self, id: &str) -> Result<Option<Agent>, ServiceError> {
        let registry = self.registry.read().await;
        Ok(registry.get(id).cloned())
    }

    async fn create_agent(&self, agent: Agent) -> Result<Agent, ServiceError> {
        let mut registry = self.registry.write().await;
        if !registry.add(agent.clone()) {
            return Err(ServiceError::Rejected(format!(
                "Agent ID already exists: {}",
                agent.id
            )));
        }

        debug!(agent_id = %agent.id, agent_name = %agent.name, "Agent registered");
        Ok(agent)
    }

    async fn update_agent(&self, updated: Agent) -> Result<Option<Agent>, ServiceError> {
        let mut registry = self.registry.write().await;
        if registry.replace(updated.clone()) {
            debug!(agent_id = %updated.id, "Agent updated");
            Ok(Some(updated))
        } else {
            Ok(None)
        }
    }

    async fn delete_agent(&self, id: &str) -> Result<bool, ServiceError> {
        let mut registry = self.registry.write().await;
        let removed = registry.remove(id).is_some();
        if removed {
            debug!(agent_id = %id, "Agent deleted");
        }
        Ok(removed)
    }

    async fn set_agent_active(
        &self,
        id: &str,
        active: bool,
    ) -> Result<Option<Agent>, ServiceError> {
        let mut registry = self.registry.write().await;
        if registry.set_active(id, active) {
            debug!(agent_id = %id, active = active, "Agent activation changed");
            Ok(registry.get(id).cloned())
        } else {
            Ok(None)
        }
    }
}
