//! To-do handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use planner_core::error::AppError;
use planner_core::types::{MessageResponse, TodoId};
use planner_entity::todo::{CreateTodo, Todo, UpdateTodo};

use crate::dto::request::TodoListParams;
use crate::extractors::{ApiJson, parse_id};
use crate::state::AppState;

/// GET /api/todos
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todo_service.list(params.into_query()?).await?;
    Ok(Json(todos))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, AppError> {
    let id: TodoId = parse_id(&id)?;
    Ok(Json(state.todo_service.get(id).await?))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state.todo_service.create(body).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PATCH /api/todos/{id}
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(body): ApiJson<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    let id: TodoId = parse_id(&id)?;
    Ok(Json(state.todo_service.update(id, body).await?))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: TodoId = parse_id(&id)?;
    state.todo_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Todo deleted")))
}
