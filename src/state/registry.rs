// Agent registry
// In-memory store of agent profiles keyed by ID

use super::agent::{Agent, AgentId};
use std::collections::HashMap;

/// In-memory registry of agent profiles
/// Backs the mocked directory service; all lookups are by agent ID
#[derive(Debug, Clone, Default)]
pub struct AgentRegistry {
    /// Registry of all agents (id -> Agent)
    agents: HashMap<AgentId, Agent>,
}

impl AgentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agent to the registry
    /// Returns true if the agent was added (false if ID already exists)
    pub fn add(&mut self, agent: Agent) -> bool {
        if self.agents.contains_key(&agent.id) {
            false
        } else {
            self.agents.insert(agent.id.clone(), agent);
            true
        }
    }

    /// Get an agent by ID
    pub fn get(&self, id: &str) -> Option<&Agent> {
        self.agents.get(id)
    }

    /// Replace an agent in the registry
    /// The replacement must carry the same ID as an existing agent
    /// Returns true if the agent was found and replaced
    pub fn replace(&mut self, updated: Agent) -> bool {
        if !self.agents.contains_key(&updated.id) {
            return false;
        }
        self.agents.insert(updated.id.clone(), updated);
        true
    }

    /// Remove an agent from the registry
    /// Returns the removed agent if it existed
    pub fn remove(&mut self, id: &str) -> Option<Agent> {
        self.agents.remove(id)
    }

    /// Update an agent's activation flag
    /// Returns true if the agent was found and updated
    pub fn set_active(&mut self, id: &str, active: bool) -> bool {
        if let Some(agent) = self.agents.get_mut(id) {
            agent.is_active = active;
            true
        } else {
            false
        }
    }

    /// Get all agents as a vector, sorted by name
    pub fn list(&self) -> Vec<&Agent> {
        let mut agents: Vec<&Agent> = self.agents.values().collect();
        agents.sort_by(|a, b| a.name.cmp(&b.name));
        agents
    }

    /// Get the number of agents in the registry
    pub fn count(&self) -> usize {
        self.agents.len()
    }
}
