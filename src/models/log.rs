//! Usage log model. Logs are append-only records of tool-launch events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tool-launch event. Tool and user names plus the department
/// are denormalized at write time so the log survives later edits or
/// deletions of the referenced entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub tool_id: String,
    pub tool_name: String,
    pub user_id: String,
    pub user_name: String,
    pub department: String,
    pub timestamp: DateTime<Utc>,
}

/// The caller-supplied part of a log entry; the store synthesizes the
/// id and timestamp.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub tool_id: String,
    pub tool_name: String,
    pub user_id: String,
    pub user_name: String,
    pub department: String,
}
