//! Handlers for the `/userAssignments` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use worklog_core::error::CoreError;
use worklog_core::pagination;
use worklog_core::types::DbId;
use worklog_core::validation::{rulebook, Violations};
use worklog_db::models::user_assignment::{
    CreateUserAssignment, UpdateUserAssignment, UserAssignment,
};
use worklog_db::repositories::UserAssignmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthToken;
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::validate::validated;

/// GET /api/v1/userAssignments
pub async fn list(
    _token: AuthToken,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<UserAssignment>>> {
    let page = pagination::clamp_page(params.page);
    let per_page = pagination::clamp_per_page(params.per_page);
    let result = UserAssignmentRepo::list(&state.pool, page, per_page).await?;
    Ok(Json(PageResponse::new(result, page, per_page)))
}

/// POST /api/v1/userAssignments
pub async fn create(
    _token: AuthToken,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<UserAssignment>)> {
    let input: CreateUserAssignment =
        validated(rulebook::USER_ASSIGNMENT, &body, Violations::default())?;
    let link = UserAssignmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /api/v1/userAssignments/{id}
pub async fn get_by_id(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserAssignment>> {
    let link = UserAssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserAssignment",
            id,
        }))?;
    Ok(Json(link))
}

/// PUT /api/v1/userAssignments/{id}
pub async fn update(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<UserAssignment>> {
    let input: UpdateUserAssignment =
        validated(rulebook::USER_ASSIGNMENT, &body, Violations::default())?;
    let link = UserAssignmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserAssignment",
            id,
        }))?;
    Ok(Json(link))
}

/// DELETE /api/v1/userAssignments/{id}
pub async fn delete(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserAssignmentRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "UserAssignment",
            id,
        }))
    }
}
