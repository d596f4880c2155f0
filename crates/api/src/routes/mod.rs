pub mod activity;
pub mod assignment;
pub mod client;
pub mod contact;
pub mod health;
pub mod status;
pub mod user;
pub mod user_assignment;
pub mod user_role;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                      list, create
/// /clients/{id}                 get, update, delete
///
/// /contacts                     list, create
/// /contacts/{id}                get, update, delete
///
/// /statuses                     list, create
/// /statuses/{id}                get, update, delete
///
/// /assignments                  list, create            (token required)
/// /assignments/{id}             get, update, delete     (token required)
/// /assignmentsClient/{id}       list for one client     (token required)
///
/// /activities                   list, create            (token required)
/// /activities/{id}              get, update, delete     (token required)
///
/// /users                        list, create
/// /users/{id}                   get, update, delete
///
/// /roles                        list, create
/// /roles/{id}                   get, update, delete
///
/// /userAssignments              list, create            (token required)
/// /userAssignments/{id}         get, update, delete     (token required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", client::router())
        .nest("/contacts", contact::router())
        .nest("/statuses", status::router())
        .nest("/assignments", assignment::router())
        .nest("/assignmentsClient", assignment::client_router())
        .nest("/activities", activity::router())
        .nest("/users", user::router())
        .nest("/roles", user_role::router())
        .nest("/userAssignments", user_assignment::router())
}
