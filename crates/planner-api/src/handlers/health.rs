//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let healthy = state.store.health_check().await.unwrap_or(false);
    if !healthy {
        tracing::warn!(provider = state.store.provider_name(), "Store health check failed");
    }

    Json(HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: state.store.provider_name().to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
