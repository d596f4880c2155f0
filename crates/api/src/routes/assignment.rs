//! Route definitions for the `/assignments` resource and the client-scoped
//! lookup mounted at `/assignmentsClient`.

use axum::routing::get;
use axum::Router;

use crate::handlers::assignment;
use crate::state::AppState;

/// Routes mounted at `/assignments`. Token required.
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
        .route("/", get(assignment::list).post(assignment::create))
        .route(
            "/{id}",
            get(assignment::get_by_id)
                .put(assignment::update)
                .delete(assignment::delete),
        )
}

/// Routes mounted at `/assignmentsClient`. Token required.
///
/// ```text
/// GET    /{client_id}    -> list_by_client
/// ```
pub fn client_router() -> Router<AppState> {
    Router::new().route("/{client_id}", get(assignment::list_by_client))
}
