//! Handlers for the `/users` resource.
//!
//! Users are the one entity with `Unique` rules: the handler probes the
//! store for username/email collisions and folds the result into the same
//! violation map the evaluator produced. The submitted password is hashed
//! before it reaches the repository, and responses use [`UserResponse`] so
//! the hash never leaves the api layer.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use worklog_core::error::CoreError;
use worklog_core::pagination;
use worklog_core::types::DbId;
use worklog_core::validation::{rulebook, Violations};
use worklog_db::models::page::Page;
use worklog_db::models::user::{CreateUser, UpdateUser, UserPayload, UserResponse};
use worklog_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::PageResponse;
use crate::state::AppState;
use crate::validate::validated;

/// Probe the store for username/email collisions among active users,
/// excluding `exclude` when validating an update.
async fn unique_violations(
    state: &AppState,
    body: &Value,
    exclude: Option<DbId>,
) -> AppResult<Violations> {
    let mut violations = Violations::default();

    if let Some(username) = body.get("username").and_then(Value::as_str) {
        if UserRepo::username_taken(&state.pool, username, exclude).await? {
            violations.add("username", "has already been taken");
        }
    }
    if let Some(email) = body.get("email").and_then(Value::as_str) {
        if UserRepo::email_taken(&state.pool, email, exclude).await? {
            violations.add("email", "has already been taken");
        }
    }

    Ok(violations)
}

/// GET /api/v1/users
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<UserResponse>>> {
    let page = pagination::clamp_page(params.page);
    let per_page = pagination::clamp_per_page(params.per_page);
    let result = UserRepo::list(&state.pool, page, per_page).await?;
    let users = Page {
        items: result.items.into_iter().map(UserResponse::from).collect(),
        total: result.total,
    };
    Ok(Json(PageResponse::new(users, page, per_page)))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let extra = unique_violations(&state, &body, None).await?;
    let payload: UserPayload = validated(rulebook::USER, &body, extra)?;

    let input = CreateUser {
        password: hash_password(&payload.password)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?,
        firstname: payload.firstname,
        lastname: payload.lastname,
        username: payload.username,
        email: payload.email,
        id_users_roles: payload.id_users_roles,
    };

    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<Json<UserResponse>> {
    let extra = unique_violations(&state, &body, Some(id)).await?;
    let payload: UserPayload = validated(rulebook::USER, &body, extra)?;

    let input = UpdateUser {
        password: hash_password(&payload.password)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?,
        firstname: payload.firstname,
        lastname: payload.lastname,
        username: payload.username,
        email: payload.email,
        id_users_roles: payload.id_users_roles,
    };

    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = UserRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
