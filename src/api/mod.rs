//! API module
//!
//! Contains HTTP request handlers for the agent directory and chat session
//! endpoints

pub mod agents;
pub mod chat;
pub mod streaming;
pub mod utils;
