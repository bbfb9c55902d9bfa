//! Tool model and the create/update request bodies with their
//! validation rules.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolType {
    #[serde(rename = "Web-based")]
    WebBased,
    #[serde(rename = "API-integrated")]
    ApiIntegrated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolCategory {
    Text,
    Image,
    Audio,
    #[serde(rename = "Web-based")]
    WebBased,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Active,
    Inactive,
}

/// A registered AI capability or external link that a user can launch.
///
/// Invariant: `category` is `Web-based` if and only if `type` is
/// `Web-based`; `launch_url` is required only for web-based tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon_url: String,
    #[serde(default)]
    pub launch_url: String,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub category: ToolCategory,
    pub status: ToolStatus,
    pub assigned_departments: Vec<String>,
    pub assigned_users: Vec<String>,
}

/// Request body for creating or replacing a tool. The same shape is
/// used for both, mirroring the admin tool form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRequest {
    pub name: String,
    pub description: String,
    pub icon_url: String,
    #[serde(default)]
    pub launch_url: String,
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    pub category: ToolCategory,
    pub status: ToolStatus,
    #[serde(default)]
    pub assigned_departments: Vec<String>,
    #[serde(default)]
    pub assigned_users: Vec<String>,
}

impl ToolRequest {
    /// Validate the request against the tool form rules.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().len() < 2 {
            return Err(AppError::Validation(
                "Name must be at least 2 characters.".to_string(),
            ));
        }
        if self.description.trim().len() < 10 {
            return Err(AppError::Validation(
                "Description must be at least 10 characters.".to_string(),
            ));
        }
        if url::Url::parse(&self.icon_url).is_err() {
            return Err(AppError::Validation(
                "Icon URL must be a valid URL.".to_string(),
            ));
        }
        if self.tool_type == ToolType::WebBased && self.launch_url.trim().is_empty() {
            return Err(AppError::Validation(
                "Launch URL is required for Web-based tools.".to_string(),
            ));
        }
        let web_category = self.category == ToolCategory::WebBased;
        let web_type = self.tool_type == ToolType::WebBased;
        if web_category != web_type {
            return Err(AppError::Validation(
                "Category must be Web-based exactly when the tool type is Web-based.".to_string(),
            ));
        }
        Ok(())
    }

    /// Materialize the request into a tool with the given id.
    pub fn into_tool(self, id: String) -> Tool {
        Tool {
            id,
            name: self.name,
            description: self.description,
            icon_url: self.icon_url,
            launch_url: self.launch_url,
            tool_type: self.tool_type,
            category: self.category,
            status: self.status,
            assigned_departments: self.assigned_departments,
            assigned_users: self.assigned_users,
        }
    }
}
