//! Service layer
//!
//! Injected service seams for everything the console consumes: the chat
//! service answering messages and the agent directory. All implementations
//! here are mocked; there is no real backend.

pub mod chat;
pub mod directory;

pub use chat::{ChatReply, ChatService, ServiceError};
pub use directory::{AgentDirectory, MockDirectory, MOCK_CHAT_REPLY};
