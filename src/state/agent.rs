//! Agent data model
//!
//! Defines the agent profile structure managed by the directory: a configured
//! chatbot/automation profile, not a running process.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an agent
pub type AgentId = String;

/// Agent kind enumeration
/// Distinguishes how an agent is backed (a prompt template or an OpenAPI spec)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Prompt-backed agent
    Prompt,
    /// OpenAPI-backed agent
    OpenApi,
}

/// Agent structure
/// Represents a registered agent profile with its metadata and activation state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Agent {
    /// Unique identifier for the agent
    pub id: AgentId,
    /// Display name of the agent
    pub name: String,
    /// Human-readable description of what the agent does
    pub description: String,
    /// Category the agent is grouped under (e.g. "Analysis", "Chat")
    pub category: String,
    /// Capabilities advertised by the agent
    pub capabilities: Vec<String>,
    /// Whether the agent is currently active
    pub is_active: bool,
    /// How the agent is backed
    pub kind: AgentKind,
    /// Optional icon URL for display
    pub icon: Option<String>,
}

impl Agent {
    /// Generate a new unique ID for an agent
    /// Uses UUID v4 for uniqueness
    pub fn generate_id() -> AgentId {
        Uuid::new_v4().to_string()
    }

    /// Validate the agent's profile
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Agent name cannot be empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("Agent category cannot be empty".to_string());
        }
        Ok(())
    }
}
