//! Agent Console Backend
//!
//! A REST API server for a mocked agent management console: an agent
//! directory with hardcoded data, simulated chat sessions, and a typing
//! reveal stream for assistant replies. The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
/// Chat session core
///
/// Message log state machine, typing reveal, history export, and the
/// session manager.
pub mod session;
pub mod state;
