//! Handlers for the `/roles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use worklog_core::error::CoreError;
use worklog_core::pagination;
use worklog_core::types::DbId;
use worklog_core::validation::{rulebook, Violations};
use worklog_db::models::user_role::{CreateUserRole, UpdateUserRole, UserRole};
use worklog_db::repositories::UserRoleRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::validate::validated;

/// GET /api/v1/roles
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<UserRole>>> {
    let page = pagination::clamp_page(params.page);
    let per_page = pagination::clamp_per_page(params.per_page);
    let result = UserRoleRepo::list(&state.pool, page, per_page).await?;
    Ok(Json(PageResponse::new(result, page, per_page)))
}

/// POST /api/v1/roles
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<UserRole>)> {
    let input: CreateUserRole = validated(rulebook::USER_ROLE, &body, Violations::default())?;
    let role = UserRoleRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// GET /api/v1/roles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserRole>> {
    let role = UserRoleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserRole",
            id,
        }))?;
    Ok(Json(role))
}

/// PUT /api/v1/roles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<UserRole>> {
    let input: UpdateUserRole = validated(rulebook::USER_ROLE, &body, Violations::default())?;
    let role = UserRoleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "UserRole",
            id,
        }))?;
    Ok(Json(role))
}

/// DELETE /api/v1/roles/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = UserRoleRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "UserRole",
            id,
        }))
    }
}
