//! Route definitions for the TrackHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(project_routes())
        .merge(screen_routes())
        .merge(session_routes())
        .merge(event_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, me, user management, invitations.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/users", get(handlers::user::list_users))
        .route("/auth/users", post(handlers::user::create_user))
        .route("/auth/invite", post(handlers::invitation::invite))
        .route(
            "/auth/register-with-invite",
            post(handlers::invitation::redeem),
        )
}

/// Project CRUD plus the deactivation (credential revocation) path.
fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::project::list_projects))
        .route("/projects", post(handlers::project::create_project))
        .route("/projects/{id}", get(handlers::project::get_project))
        .route("/projects/{id}", put(handlers::project::update_project))
        .route(
            "/projects/{id}/deactivate",
            put(handlers::project::deactivate_project),
        )
}

/// Screen registration and listing.
fn screen_routes() -> Router<AppState> {
    Router::new()
        .route("/screens", post(handlers::screen::register_screen))
        .route("/screens", get(handlers::screen::list_screens))
}

/// Session endpoints: device-side open, dashboard-side queries.
///
/// Static segments (`device`, `time`, `create-session`) take precedence
/// over the `{id}` capture.
fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/create-session",
            post(handlers::session::open_session),
        )
        .route("/sessions", get(handlers::session::list_sessions))
        .route(
            "/sessions/device",
            get(handlers::session::list_device_sessions),
        )
        .route(
            "/sessions/time",
            get(handlers::session::list_recent_sessions),
        )
        .route("/sessions/{id}", get(handlers::session::get_session))
}

/// Event ingestion (device-credential path) and dashboard queries.
fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events/track_screen",
            post(handlers::tracking::track_screen),
        )
        .route("/events/track_event", post(handlers::tracking::track_event))
        .route("/events", get(handlers::tracking::list_events))
}

/// Health check.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
