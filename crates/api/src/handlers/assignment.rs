//! Handlers for the `/assignments` resource and the client-scoped lookup.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use worklog_core::error::CoreError;
use worklog_core::pagination;
use worklog_core::types::DbId;
use worklog_core::validation::{rulebook, Violations};
use worklog_db::models::assignment::{Assignment, CreateAssignment, UpdateAssignment};
use worklog_db::repositories::AssignmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthToken;
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::validate::validated;

/// GET /api/v1/assignments
pub async fn list(
    _token: AuthToken,
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<Assignment>>> {
    let page = pagination::clamp_page(params.page);
    let per_page = pagination::clamp_per_page(params.per_page);
    let result = AssignmentRepo::list(&state.pool, page, per_page).await?;
    Ok(Json(PageResponse::new(result, page, per_page)))
}

/// GET /api/v1/assignmentsClient/{client_id}
///
/// The full active set for one client, unpaginated. A client with no
/// assignments yields an empty array, not an error.
pub async fn list_by_client(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(assignments))
}

/// POST /api/v1/assignments
pub async fn create(
    _token: AuthToken,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let input: CreateAssignment = validated(rulebook::ASSIGNMENT, &body, Violations::default())?;
    let assignment = AssignmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/v1/assignments/{id}
pub async fn get_by_id(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Assignment>> {
    let assignment = AssignmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id,
        }))?;
    Ok(Json(assignment))
}

/// PUT /api/v1/assignments/{id}
pub async fn update(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<Assignment>> {
    let input: UpdateAssignment = validated(rulebook::ASSIGNMENT, &body, Violations::default())?;
    let assignment = AssignmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id,
        }))?;
    Ok(Json(assignment))
}

/// DELETE /api/v1/assignments/{id}
pub async fn delete(
    _token: AuthToken,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AssignmentRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Assignment",
            id,
        }))
    }
}
