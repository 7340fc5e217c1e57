//! Calendar event handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use planner_core::error::AppError;
use planner_core::types::{EventId, MessageResponse};
use planner_entity::event::{CreateEvent, Event, UpdateEvent};

use crate::extractors::{ApiJson, parse_id};
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.event_service.list().await?))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, AppError> {
    let id: EventId = parse_id(&id)?;
    Ok(Json(state.event_service.get(id).await?))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateEvent>,
) -> Result<(StatusCode, Json<Event>), AppError> {
    let event = state.event_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /api/events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateEvent>,
) -> Result<Json<Event>, AppError> {
    let id: EventId = parse_id(&id)?;
    Ok(Json(state.event_service.update(id, body).await?))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: EventId = parse_id(&id)?;
    state.event_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Event deleted")))
}
