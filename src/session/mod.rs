//! Chat session module
//!
//! The conversation core: message log and pending-flag state machine,
//! session lifecycle management, typing reveal, and history export.

pub mod chat_session;
pub mod export;
pub mod manager;
pub mod models;
pub mod reporter;
pub mod reveal;

pub use chat_session::{ChatSession, SubmitOutcome, EMPTY_REPLY_FALLBACK};
pub use export::{ExportedMessage, HistoryExport};
pub use manager::SessionManager;
pub use models::{Message, MessageRole};
pub use reporter::{ErrorReporter, TracingReporter};
pub use reveal::{TypingRevealer, DEFAULT_DELAY_PER_CHAR};
