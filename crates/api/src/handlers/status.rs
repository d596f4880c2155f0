//! Handlers for the `/statuses` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use worklog_core::error::CoreError;
use worklog_core::pagination;
use worklog_core::types::DbId;
use worklog_core::validation::{rulebook, Violations};
use worklog_db::models::status::{CreateStatus, Status, UpdateStatus};
use worklog_db::repositories::StatusRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::validate::validated;

/// GET /api/v1/statuses
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<Status>>> {
    let page = pagination::clamp_page(params.page);
    let per_page = pagination::clamp_per_page(params.per_page);
    let result = StatusRepo::list(&state.pool, page, per_page).await?;
    Ok(Json(PageResponse::new(result, page, per_page)))
}

/// POST /api/v1/statuses
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Status>)> {
    let input: CreateStatus = validated(rulebook::STATUS, &body, Violations::default())?;
    let status = StatusRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(status)))
}

/// GET /api/v1/statuses/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Status>> {
    let status = StatusRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Status",
            id,
        }))?;
    Ok(Json(status))
}

/// PUT /api/v1/statuses/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<Status>> {
    let input: UpdateStatus = validated(rulebook::STATUS, &body, Violations::default())?;
    let status = StatusRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Status",
            id,
        }))?;
    Ok(Json(status))
}

/// DELETE /api/v1/statuses/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StatusRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Status",
            id,
        }))
    }
}
