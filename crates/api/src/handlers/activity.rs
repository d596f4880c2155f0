//! Handlers for the `/activities` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use worklog_core::error::CoreError;
use worklog_core::pagination;
use worklog_core::types::DbId;
use worklog_core::validation::{rulebook, Violations};
use worklog_db::models::activity::{Activity, CreateActivity, UpdateActivity};
use worklog_db::repositories::ActivityRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthToken;
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::validate::validated;

/// GET /api/v1/activities
pub async fn list(
    _token: AuthToken,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<Activity>>> {
    let page = pagination::clamp_page(params.page);
    let per_page = pagination::clamp_per_page(params.per_page);
    let result = ActivityRepo::list(&state.pool, page, per_page).await?;
    Ok(Json(PageResponse::new(result, page, per_page)))
}

/// POST /api/v1/activities
pub async fn create(
    _token: AuthToken,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let input: CreateActivity = validated(rulebook::ACTIVITY, &body, Violations::default())?;
    let activity = ActivityRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

/// GET /api/v1/activities/{id}
pub async fn get_by_id(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Activity>> {
    let activity = ActivityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}

/// PUT /api/v1/activities/{id}
pub async fn update(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<Activity>> {
    let input: UpdateActivity = validated(rulebook::ACTIVITY, &body, Violations::default())?;
    let activity = ActivityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))?;
    Ok(Json(activity))
}

/// DELETE /api/v1/activities/{id}
pub async fn delete(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ActivityRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }))
    }
}
