//! Route definitions for the `/userAssignments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::user_assignment;
use crate::state::AppState;

/// Routes mounted at `/userAssignments`. Token required.
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
        .route(
            "/",
            get(user_assignment::list).post(user_assignment::create),
        )
        .route(
            "/{id}",
            get(user_assignment::get_by_id)
                .put(user_assignment::update)
                .delete(user_assignment::delete),
        )
}
