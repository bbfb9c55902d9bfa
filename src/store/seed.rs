//! Demo seed data for the in-memory store.

use chrono::{Duration, Utc};

use super::Store;
use crate::models::{
    Department, LogEntry, Role, Tool, ToolCategory, ToolStatus, ToolType, User,
};

fn user(
    id: &str,
    name: &str,
    email: &str,
    department: Department,
    role: Role,
    assigned_tools: &[&str],
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        avatar_url: Some(format!("https://avatar.vercel.sh/{}.png", email)),
        department,
        role,
        assigned_tools: assigned_tools.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_users() -> Vec<User> {
    vec![
        user(
            "user-1",
            "Alice Admin",
            "alice@gridai.com",
            Department::Unassigned,
            Role::SuperAdmin,
            &[],
        ),
        user(
            "user-2",
            "Mark Manager",
            "mark@gridai.com",
            Department::Sales,
            Role::Management,
            &[],
        ),
        user(
            "user-3",
            "Dana Dev",
            "dana@gridai.com",
            Department::Dev,
            Role::DepartmentAdmin,
            &["tool-2"],
        ),
        user(
            "user-4",
            "Eve Employee",
            "eve@gridai.com",
            Department::Marketing,
            Role::Employee,
            &["tool-3"],
        ),
        user(
            "user-5",
            "Hank HR",
            "hank@gridai.com",
            Department::Hr,
            Role::Employee,
            &[],
        ),
    ]
}

fn tool(
    id: &str,
    name: &str,
    description: &str,
    tool_type: ToolType,
    category: ToolCategory,
    status: ToolStatus,
    launch_url: &str,
    departments: &[&str],
    users: &[&str],
) -> Tool {
    Tool {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon_url: "https://placehold.co/100x100.png".to_string(),
        launch_url: launch_url.to_string(),
        tool_type,
        category,
        status,
        assigned_departments: departments.iter().map(|s| s.to_string()).collect(),
        assigned_users: users.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_tools() -> Vec<Tool> {
    vec![
        tool(
            "tool-1",
            "ChatGPT",
            "General-purpose conversational assistant for research and drafting.",
            ToolType::WebBased,
            ToolCategory::WebBased,
            ToolStatus::Active,
            "https://chat.openai.com",
            &["Marketing", "HR", "Dev", "Sales"],
            &[],
        ),
        tool(
            "tool-2",
            "Scribe",
            "Generates reports, emails, and summaries with Markdown formatting.",
            ToolType::ApiIntegrated,
            ToolCategory::Text,
            ToolStatus::Active,
            "",
            &["Dev", "Marketing"],
            &[],
        ),
        tool(
            "tool-3",
            "PixelCraft",
            "Creates images from natural-language descriptions.",
            ToolType::ApiIntegrated,
            ToolCategory::Image,
            ToolStatus::Active,
            "",
            &["Marketing"],
            &[],
        ),
        tool(
            "tool-4",
            "EchoWave",
            "Converts text prompts into natural-sounding speech.",
            ToolType::ApiIntegrated,
            ToolCategory::Audio,
            ToolStatus::Active,
            "",
            &["Sales"],
            &[],
        ),
        tool(
            "tool-5",
            "DataGrid",
            "Generates structured sample data in CSV format for spreadsheets.",
            ToolType::ApiIntegrated,
            ToolCategory::Text,
            ToolStatus::Inactive,
            "",
            &["Dev", "Sales"],
            &[],
        ),
    ]
}

fn seed_logs() -> Vec<LogEntry> {
    let now = Utc::now();
    vec![
        LogEntry {
            id: "log-1".to_string(),
            tool_id: "tool-2".to_string(),
            tool_name: "Scribe".to_string(),
            user_id: "user-3".to_string(),
            user_name: "Dana Dev".to_string(),
            department: "Dev".to_string(),
            timestamp: now - Duration::hours(2),
        },
        LogEntry {
            id: "log-2".to_string(),
            tool_id: "tool-3".to_string(),
            tool_name: "PixelCraft".to_string(),
            user_id: "user-4".to_string(),
            user_name: "Eve Employee".to_string(),
            department: "Marketing".to_string(),
            timestamp: now - Duration::hours(26),
        },
        LogEntry {
            id: "log-3".to_string(),
            tool_id: "tool-1".to_string(),
            tool_name: "ChatGPT".to_string(),
            user_id: "user-5".to_string(),
            user_name: "Hank HR".to_string(),
            department: "HR".to_string(),
            timestamp: now - Duration::days(3),
        },
    ]
}

/// Build a store populated with the demo users, tools, and logs.
pub fn seed_store() -> Store {
    Store::with_data(seed_users(), seed_tools(), seed_logs())
}
