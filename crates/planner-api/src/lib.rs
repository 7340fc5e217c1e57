//! # planner-api
//!
//! HTTP API layer for Planner built on Axum.
//!
//! Provides the REST endpoints for to-dos, events, notes and share links,
//! plus middleware (CORS, compression, request logging), extractors and
//! DTOs. Errors are rendered by `AppError`'s `IntoResponse` impl in
//! `planner-core`.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
