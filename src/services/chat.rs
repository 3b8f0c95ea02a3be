//! Chat service seam
//!
//! The chat session talks to whatever answers messages through this trait.
//! The service is treated as a black box: it resolves or rejects exactly once
//! per request, and the caller decides what to do with either outcome.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when talking to a chat or directory service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The service could not be reached or stopped responding
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The service answered but refused the request
    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Reply payload returned by a chat service
///
/// `text` is optional: a reply with a missing or empty payload is still a
/// successful round trip and is substituted with a fixed placeholder by the
/// session (never treated as an error).
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// Reply text, if the service produced one
    pub text: Option<String>,
}

/// A service that answers chat messages
///
/// Injected into each `ChatSession` at construction; there is no ambient or
/// global client.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Send a message and wait for the reply
    ///
    /// # Arguments
    /// * `text` - Message content as submitted by the user
    ///
    /// # Returns
    /// * `Result<ChatReply, ServiceError>` - Reply payload or failure
    async fn send_message(&self, text: &str) -> Result<ChatReply, ServiceError>;
}
