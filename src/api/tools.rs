//! Tool catalog, management, and launch endpoints.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use super::{success, ApiResult};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{NewLogEntry, Tool, ToolRequest, ToolType};
use crate::policy;
use crate::AppState;

/// GET /api/tools - The tools visible to the current user.
pub async fn list_tools(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Vec<Tool>> {
    let catalog = state.store.list_tools();
    let visible = policy::visible_tools(&user, &catalog)
        .into_iter()
        .cloned()
        .collect();
    success(visible)
}

/// GET /api/tools/:id - A single tool, if visible to the current user.
/// Tools outside the user's visibility read as missing.
pub async fn get_tool(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<Tool> {
    match state.store.get_tool(&id) {
        Some(tool) if policy::is_visible(&user, &tool) => success(tool),
        _ => Err(AppError::NotFound(format!("Tool {} not found", id))),
    }
}

/// GET /api/tools/all - The raw catalog, for the admin tool table.
pub async fn list_all_tools(State(state): State<AppState>) -> ApiResult<Vec<Tool>> {
    success(state.store.list_tools())
}

/// POST /api/tools - Register a new tool.
pub async fn create_tool(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Json(request): Json<ToolRequest>,
) -> ApiResult<Tool> {
    if !policy::can_create_tool(&actor) {
        return Err(AppError::Forbidden(
            "Only a super admin can register new tools".to_string(),
        ));
    }
    request.validate()?;

    let tool = state.store.add_tool(request);
    tracing::info!(tool_id = %tool.id, created_by = %actor.id, "Tool created");
    success(tool)
}

/// PUT /api/tools/:id - Replace an existing tool. Department admins may
/// only edit tools scoped to their own department.
pub async fn update_tool(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(request): Json<ToolRequest>,
) -> ApiResult<Tool> {
    let existing = state
        .store
        .get_tool(&id)
        .ok_or_else(|| AppError::NotFound(format!("Tool {} not found", id)))?;

    if !policy::can_edit_tool(&actor, &existing) {
        return Err(AppError::Forbidden(
            "You cannot manage this tool".to_string(),
        ));
    }
    request.validate()?;

    let tool = state.store.update_tool(&id, request)?;
    tracing::info!(tool_id = %tool.id, updated_by = %actor.id, "Tool updated");
    success(tool)
}

/// Where a launched tool opens: an external URL in a new tab, or the
/// in-app playground route.
#[derive(Debug, Serialize)]
#[serde(tag = "target")]
pub enum LaunchTarget {
    #[serde(rename = "external", rename_all = "camelCase")]
    External { launch_url: String },
    #[serde(rename = "playground", rename_all = "camelCase")]
    Playground { tool_id: String },
}

/// POST /api/tools/:id/launch - Record a launch event and return the
/// launch target. The log append and the launch are sequential, not
/// transactional.
pub async fn launch_tool(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<LaunchTarget> {
    let tool = state
        .store
        .get_tool(&id)
        .filter(|t| policy::is_visible(&user, t))
        .ok_or_else(|| AppError::NotFound(format!("Tool {} not found", id)))?;

    if !policy::can_launch(&tool) {
        return Err(AppError::Forbidden(format!(
            "{} is currently inactive",
            tool.name
        )));
    }

    state.store.add_log(NewLogEntry {
        tool_id: tool.id.clone(),
        tool_name: tool.name.clone(),
        user_id: user.id.clone(),
        user_name: user.name.clone(),
        department: user.department.to_string(),
    });
    tracing::info!(tool_id = %tool.id, user_id = %user.id, "Tool launched");

    let target = match tool.tool_type {
        ToolType::WebBased => LaunchTarget::External {
            launch_url: tool.launch_url,
        },
        ToolType::ApiIntegrated => LaunchTarget::Playground { tool_id: tool.id },
    };
    success(target)
}
