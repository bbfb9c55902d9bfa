//! In-memory data store.
//!
//! Process memory is the only "database": a restart reverts to the seed
//! data. Collections live behind `RwLock`s and every mutation is a
//! whole-value replacement, so there is no atomicity across collections
//! and no durability. The store is an explicit, injectable object so
//! tests can construct isolated instances.

mod seed;

pub use seed::seed_store;

use std::sync::RwLock;

use chrono::Utc;

use crate::errors::AppError;
use crate::models::{CreateUserRequest, LogEntry, NewLogEntry, Tool, ToolRequest, User};

/// In-memory store owning the user, tool, and log collections.
#[derive(Debug, Default)]
pub struct Store {
    users: RwLock<Vec<User>>,
    tools: RwLock<Vec<Tool>>,
    logs: RwLock<Vec<LogEntry>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given collections.
    pub fn with_data(users: Vec<User>, tools: Vec<Tool>, logs: Vec<LogEntry>) -> Self {
        Self {
            users: RwLock::new(users),
            tools: RwLock::new(tools),
            logs: RwLock::new(logs),
        }
    }

    // ==================== USER OPERATIONS ====================

    /// List all users.
    pub fn list_users(&self) -> Vec<User> {
        self.users.read().expect("users lock poisoned").clone()
    }

    /// Look up a user by exact, case-sensitive email match.
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .expect("users lock poisoned")
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Get a user by id.
    pub fn get_user(&self, id: &str) -> Option<User> {
        self.users
            .read()
            .expect("users lock poisoned")
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    /// Create a new user and prepend it to the collection. Assigned
    /// tools default to empty and the avatar to a deterministic
    /// placeholder keyed by email.
    pub fn add_user(&self, request: CreateUserRequest) -> User {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            avatar_url: Some(format!("https://avatar.vercel.sh/{}.png", request.email)),
            name: request.name,
            email: request.email,
            department: request.department,
            role: request.role,
            assigned_tools: Vec::new(),
        };
        self.users
            .write()
            .expect("users lock poisoned")
            .insert(0, user.clone());
        user
    }

    /// Remove a user by id. Logs and tool assignments referencing the
    /// id are left dangling; there is no cascade.
    pub fn remove_user(&self, id: &str) -> Result<(), AppError> {
        let mut users = self.users.write().expect("users lock poisoned");
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    // ==================== TOOL OPERATIONS ====================

    /// List the full tool catalog.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.read().expect("tools lock poisoned").clone()
    }

    /// Get a tool by id.
    pub fn get_tool(&self, id: &str) -> Option<Tool> {
        self.tools
            .read()
            .expect("tools lock poisoned")
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    /// Create a new tool with a synthesized id.
    pub fn add_tool(&self, request: ToolRequest) -> Tool {
        let tool = request.into_tool(uuid::Uuid::new_v4().to_string());
        self.tools
            .write()
            .expect("tools lock poisoned")
            .insert(0, tool.clone());
        tool
    }

    /// Replace a tool by id. Last write wins; there is no optimistic
    /// concurrency control.
    pub fn update_tool(&self, id: &str, request: ToolRequest) -> Result<Tool, AppError> {
        let mut tools = self.tools.write().expect("tools lock poisoned");
        let slot = tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Tool {} not found", id)))?;
        let updated = request.into_tool(id.to_string());
        *slot = updated.clone();
        Ok(updated)
    }

    // ==================== LOG OPERATIONS ====================

    /// List all logs, newest first.
    pub fn list_logs(&self) -> Vec<LogEntry> {
        self.logs.read().expect("logs lock poisoned").clone()
    }

    /// Append a launch event. The store synthesizes the id and
    /// timestamp and prepends, keeping the collection newest-first.
    pub fn add_log(&self, entry: NewLogEntry) -> LogEntry {
        let log = LogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            tool_id: entry.tool_id,
            tool_name: entry.tool_name,
            user_id: entry.user_id,
            user_name: entry.user_name,
            department: entry.department,
            timestamp: Utc::now(),
        };
        self.logs
            .write()
            .expect("logs lock poisoned")
            .insert(0, log.clone());
        log
    }
}
