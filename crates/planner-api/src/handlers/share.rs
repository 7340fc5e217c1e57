//! Share link handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;

use planner_core::error::AppError;
use planner_entity::share::ShareLink;
use planner_service::share::ResolvedShare;

use crate::dto::request::CreateShareBody;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /api/shares
pub async fn create_share(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateShareBody>,
) -> Result<(StatusCode, Json<ShareLink>), AppError> {
    let req = body.into_request(Utc::now())?;
    let created = state.share_service.create_share(req).await?;
    Ok((StatusCode::CREATED, Json(created.link)))
}

/// GET /api/shares/{token}
pub async fn resolve_share(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ResolvedShare>, AppError> {
    let resolved = state.share_service.resolve_share(&token).await?;
    Ok(Json(resolved))
}
