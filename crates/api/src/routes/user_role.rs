//! Route definitions for the `/roles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_role;
use crate::state::AppState;

/// Routes mounted at `/roles`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user_role::list).post(user_role::create))
        .route(
            "/{id}",
            get(user_role::get_by_id)
                .put(user_role::update)
                .delete(user_role::delete),
        )
}
