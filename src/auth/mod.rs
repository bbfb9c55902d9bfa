//! Session-token authentication and role guards.
//!
//! The guard has three outcomes: no resolvable session (401, the SPA's
//! redirect-to-login), a session whose role is outside the accepted set
//! (403 with a deliberately generic message, the SPA's silent redirect
//! to the dashboard), or the request proceeds with the session user in
//! the request extensions.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::{AppError, ErrorResponse};
use crate::models::{Role, User};
use crate::session::SessionStore;

/// Header name for the session token.
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// The authenticated user for this request, injected by [`auth_layer`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Extract the session token from the request headers. Accepts the
/// dedicated header or an `Authorization: Bearer` token.
pub fn extract_token(request: &Request) -> Option<String> {
    let from_header = request
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    if from_header.is_some() {
        return from_header;
    }

    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(|s| s.to_string())
}

/// Authentication layer: resolves the session token and stores both the
/// user and the token in the request extensions.
pub async fn auth_layer(sessions: Arc<SessionStore>, mut request: Request, next: Next) -> Response {
    let Some(token) = extract_token(&request) else {
        return unauthenticated_response("Missing session token");
    };

    let Some(user) = sessions.get(&token) else {
        return unauthenticated_response("Invalid or expired session");
    };

    request.extensions_mut().insert(CurrentUser(user));
    request.extensions_mut().insert(SessionToken(token));
    next.run(request).await
}

/// The resolved session token, for handlers that mutate the session.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Role guard layer: rejects requests whose session user's role is not
/// in the accepted set. Must run after [`auth_layer`].
pub async fn require_role(accepted: &'static [Role], request: Request, next: Next) -> Response {
    let Some(CurrentUser(user)) = request.extensions().get::<CurrentUser>().cloned() else {
        return unauthenticated_response("Missing session token");
    };

    if !accepted.contains(&user.role) {
        tracing::debug!(user_id = %user.id, role = ?user.role, "Role check failed");
        let body = ErrorResponse::new(&AppError::Forbidden(
            "You do not have access to this area".to_string(),
        ));
        return (StatusCode::FORBIDDEN, Json(body)).into_response();
    }

    next.run(request).await
}

/// Create an unauthenticated response.
fn unauthenticated_response(message: &str) -> Response {
    let body = ErrorResponse::new(&AppError::Unauthorized(message.to_string()));
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_headers(headers: &[(&str, &str)]) -> Request {
        let mut builder = Request::builder().uri("/api/tools");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token_from_header() {
        let request = request_with_headers(&[(SESSION_TOKEN_HEADER, "tok-123")]);
        assert_eq!(extract_token(&request).as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_extract_token_from_bearer() {
        let request = request_with_headers(&[("authorization", "Bearer tok-456")]);
        assert_eq!(extract_token(&request).as_deref(), Some("tok-456"));
    }

    #[test]
    fn test_dedicated_header_wins() {
        let request = request_with_headers(&[
            (SESSION_TOKEN_HEADER, "tok-primary"),
            ("authorization", "Bearer tok-secondary"),
        ]);
        assert_eq!(extract_token(&request).as_deref(), Some("tok-primary"));
    }

    #[test]
    fn test_no_token() {
        let request = request_with_headers(&[]);
        assert!(extract_token(&request).is_none());
    }
}
