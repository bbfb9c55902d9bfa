//! User management endpoints (admin section).

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{success, ApiResult};
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::models::{CreateUserRequest, User};
use crate::policy;
use crate::AppState;

/// GET /api/users - Users the actor can manage, plus themselves.
pub async fn list_users(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
) -> ApiResult<Vec<User>> {
    let users = state
        .store
        .list_users()
        .into_iter()
        .filter(|u| policy::can_manage_user(&actor, u) || u.id == actor.id)
        .collect();
    success(users)
}

/// POST /api/users - Create a new user.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<User> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if !request.email.contains('@') || request.email.len() < 3 {
        return Err(AppError::Validation(
            "A valid email address is required".to_string(),
        ));
    }
    if state.store.find_user_by_email(&request.email).is_some() {
        return Err(AppError::Validation(
            "A user with this email already exists".to_string(),
        ));
    }
    if !policy::assignable_roles(&actor).contains(&request.role) {
        return Err(AppError::Forbidden(
            "You cannot assign this role".to_string(),
        ));
    }

    let user = state.store.add_user(request);
    tracing::info!(user_id = %user.id, created_by = %actor.id, "User created");
    success(user)
}

/// DELETE /api/users/:id - Remove a user. Logs and tool assignments
/// referencing the id are left dangling.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(CurrentUser(actor)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let target = state
        .store
        .get_user(&id)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    if !policy::can_manage_user(&actor, &target) {
        return Err(AppError::Forbidden(
            "You cannot manage this user".to_string(),
        ));
    }

    state.store.remove_user(&id)?;
    tracing::info!(user_id = %id, removed_by = %actor.id, "User removed");
    success(())
}
