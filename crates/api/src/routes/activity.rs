//! Route definitions for the `/activities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`. Token required.
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
        .route("/", get(activity::list).post(activity::create))
        .route(
            "/{id}",
            get(activity::get_by_id)
                .put(activity::update)
                .delete(activity::delete),
        )
}
