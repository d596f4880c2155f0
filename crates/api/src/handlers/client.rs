//! Handlers for the `/clients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use worklog_core::error::CoreError;
use worklog_core::pagination;
use worklog_core::types::DbId;
use worklog_core::validation::{rulebook, Violations};
use worklog_db::models::client::{Client, CreateClient, UpdateClient};
use worklog_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::validate::validated;

/// GET /api/v1/clients
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<Client>>> {
    let page = pagination::clamp_page(params.page);
    let per_page = pagination::clamp_per_page(params.per_page);
    let result = ClientRepo::list(&state.pool, page, per_page).await?;
    Ok(Json(PageResponse::new(result, page, per_page)))
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let input: CreateClient = validated(rulebook::CLIENT, &body, Violations::default())?;
    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<Client>> {
    let input: UpdateClient = validated(rulebook::CLIENT, &body, Violations::default())?;
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ClientRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
