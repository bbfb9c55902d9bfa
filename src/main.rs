//! GridAI Backend
//!
//! REST backend for the GridAI internal AI tool hub: role-gated tool
//! catalog, in-memory user/tool/log store, and a thin gateway to an
//! external generative model.

mod ai;
mod api;
mod auth;
mod config;
mod errors;
mod models;
mod policy;
mod session;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ai::{GenAi, GenAiDisabled, GeminiClient};
use config::Config;
use models::Role;
use session::SessionStore;
use store::Store;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub sessions: Arc<SessionStore>,
    pub genai: Arc<dyn GenAi>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting GridAI Backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    // The generation gateway degrades to uniform failures without a key
    let genai: Arc<dyn GenAi> = match &config.gemini_api_key {
        Some(key) => Arc::new(GeminiClient::new(
            key.clone(),
            config.gemini_base_url.clone(),
        )?),
        None => {
            tracing::warn!(
                "No Gemini API key configured (GRIDAI_GEMINI_API_KEY). AI generation is disabled!"
            );
            Arc::new(GenAiDisabled)
        }
    };

    // In-memory store; a restart reverts to the seed data
    let store = if config.seed {
        Arc::new(store::seed_store())
    } else {
        Arc::new(Store::new())
    };
    tracing::info!(
        users = store.list_users().len(),
        tools = store.list_tools().len(),
        "Store initialized"
    );

    let state = AppState {
        store,
        sessions: Arc::new(SessionStore::new()),
        genai,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Admin section: user/tool management, logs, and insights
    let admin_routes = Router::new()
        .route("/tools/all", get(api::list_all_tools))
        .route("/tools", post(api::create_tool))
        .route("/tools/{id}", put(api::update_tool))
        .route("/users", get(api::list_users))
        .route("/users", post(api::create_user))
        .route("/users/{id}", delete(api::delete_user))
        .route("/logs", get(api::list_logs))
        .route("/logs/export", get(api::export_logs))
        .route("/ai/insights", post(api::insights))
        .layer(middleware::from_fn(|req, next| {
            auth::require_role(Role::ADMIN_ROLES, req, next)
        }));

    // Routes available to every authenticated user
    let sessions = state.sessions.clone();
    let authed_routes = Router::new()
        .route("/auth/logout", post(api::logout))
        .route("/auth/me", get(api::me))
        .route("/auth/profile", put(api::update_profile))
        .route("/tools", get(api::list_tools))
        .route("/tools/{id}", get(api::get_tool))
        .route("/tools/{id}/launch", post(api::launch_tool))
        .route("/tools/{id}/playground", post(api::tool_playground))
        .route("/ai/playground", post(api::playground))
        .route("/ai/image", post(api::image))
        .route("/ai/audio", post(api::audio))
        .merge(admin_routes)
        .layer(middleware::from_fn(move |req, next| {
            auth::auth_layer(sessions.clone(), req, next)
        }));

    // Login needs no session
    let api_routes = Router::new()
        .route("/auth/login", post(api::login))
        .merge(authed_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
