//! Note handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use planner_core::error::AppError;
use planner_core::types::{MessageResponse, NoteId};
use planner_entity::note::{CreateNote, Note, UpdateNote};

use crate::extractors::{ApiJson, parse_id};
use crate::state::AppState;

/// GET /api/notes
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, AppError> {
    Ok(Json(state.note_service.list().await?))
}

/// GET /api/notes/tags/{tag}
pub async fn list_notes_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<Note>>, AppError> {
    Ok(Json(state.note_service.list_by_tag(&tag).await?))
}

/// GET /api/notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, AppError> {
    let id: NoteId = parse_id(&id)?;
    Ok(Json(state.note_service.get(id).await?))
}

/// POST /api/notes
pub async fn create_note(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateNote>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let note = state.note_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// PATCH /api/notes/{id}
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateNote>,
) -> Result<Json<Note>, AppError> {
    let id: NoteId = parse_id(&id)?;
    Ok(Json(state.note_service.update(id, body).await?))
}

/// DELETE /api/notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: NoteId = parse_id(&id)?;
    state.note_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Note deleted")))
}
