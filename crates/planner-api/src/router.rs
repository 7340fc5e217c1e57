//! Route definitions for the Planner HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the body limit and request
/// logging.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(todo_routes())
        .merge(event_routes())
        .merge(note_routes())
        .merge(share_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// To-do CRUD
fn todo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::todo::get_todo)
                .patch(handlers::todo::update_todo)
                .delete(handlers::todo::delete_todo),
        )
}

/// Calendar event CRUD
fn event_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(handlers::event::list_events).post(handlers::event::create_event),
        )
        .route(
            "/events/{id}",
            get(handlers::event::get_event)
                .patch(handlers::event::update_event)
                .delete(handlers::event::delete_event),
        )
}

/// Note CRUD and tag listing
fn note_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
            get(handlers::note::list_notes).post(handlers::note::create_note),
        )
        .route("/notes/tags/{tag}", get(handlers::note::list_notes_by_tag))
        .route(
            "/notes/{id}",
            get(handlers::note::get_note)
                .patch(handlers::note::update_note)
                .delete(handlers::note::delete_note),
        )
}

/// Share creation and public resolution
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares", post(handlers::share::create_share))
        .route("/shares/{token}", get(handlers::share::resolve_share))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
