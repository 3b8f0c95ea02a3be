//! Conversation export
//!
//! Serializable snapshot of a session's log plus its metadata, suitable for
//! writing to a file. The exact on-disk formatting is not a compatibility
//! contract.

use serde::{Deserialize, Serialize};

/// One message in an exported conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedMessage {
    /// Sender role ("user" or "assistant")
    pub role: String,
    /// Full message content
    pub content: String,
}

/// Exported conversation document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryExport {
    /// Session unique identifier
    pub session_id: String,
    /// ID of the agent the session talked to
    pub agent_id: String,
    /// Name of the agent the session talked to
    pub agent_name: String,
    /// When the session started (Unix timestamp)
    pub started_at: i64,
    /// When the log last changed (Unix timestamp)
    pub updated_at: i64,
    /// Every message in creation order
    pub messages: Vec<ExportedMessage>,
}

impl HistoryExport {
    /// Render the document as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_export() -> HistoryExport {
        HistoryExport {
            session_id: "session-1".to_string(),
            agent_id: "agent-1".to_string(),
            agent_name: "Test Agent".to_string(),
            started_at: 1_700_000_000,
            updated_at: 1_700_000_060,
            messages: vec![
                ExportedMessage {
                    role: "user".to_string(),
                    content: "Hello".to_string(),
                },
                ExportedMessage {
                    role: "assistant".to_string(),
                    content: "Hi there".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_export_round_trip() {
        let export = sample_export();
        let json = export.to_json_pretty().unwrap();
        let parsed: HistoryExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, export);
    }

    #[test]
    fn test_export_written_to_file() {
        let export = sample_export();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        std::fs::write(&path, export.to_json_pretty().unwrap()).unwrap();

        let loaded: HistoryExport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.messages.len(), 2);
        assert_eq!(loaded.messages[0].role, "user");
        assert_eq!(loaded.messages[1].content, "Hi there");
    }
}
