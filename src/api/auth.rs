//! Authentication endpoints.
//!
//! Login is a bare email lookup with no password verification, lockout,
//! or rate limiting. Profile edits touch only the session's user copy,
//! not the store's user collection; the two can drift until the next
//! login.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::auth::{CurrentUser, SessionToken};
use crate::errors::AppError;
use crate::models::{UpdateProfileRequest, User};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// POST /api/auth/login - Log in by exact, case-sensitive email match.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let Some(user) = state.store.find_user_by_email(&request.email) else {
        tracing::debug!(email = %request.email, "Login failed: unknown email");
        return Err(AppError::Unauthorized(
            "No user found with this email".to_string(),
        ));
    };

    let token = state.sessions.create(user.clone());
    tracing::info!(user_id = %user.id, "User logged in");
    success(LoginResponse { token, user })
}

/// POST /api/auth/logout - Clear the current session.
pub async fn logout(
    State(state): State<AppState>,
    Extension(SessionToken(token)): Extension<SessionToken>,
) -> ApiResult<()> {
    state.sessions.remove(&token);
    success(())
}

/// GET /api/auth/me - The session's user copy, as stored at login or
/// last profile edit. Deliberately not re-checked against the user
/// collection.
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> ApiResult<User> {
    success(user)
}

/// PUT /api/auth/profile - Self-service profile edit (name and avatar
/// only). Replaces the session copy; the store's user collection is
/// left untouched.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(SessionToken(token)): Extension<SessionToken>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<User> {
    let mut updated = user;
    if let Some(name) = request.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Name cannot be empty".to_string()));
        }
        updated.name = name;
    }
    if let Some(avatar_url) = request.avatar_url {
        if url::Url::parse(&avatar_url).is_err() {
            return Err(AppError::Validation(
                "Avatar URL must be a valid URL".to_string(),
            ));
        }
        updated.avatar_url = Some(avatar_url);
    }

    state
        .sessions
        .update(&token, updated)
        .map_or_else(
            || Err(AppError::Unauthorized("Invalid or expired session".to_string())),
            success,
        )
}
