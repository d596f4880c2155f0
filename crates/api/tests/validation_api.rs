//! HTTP-level integration tests for the validation surface.
//!
//! Every create/update runs the entity's full rule table; failures come
//! back as 422 with a per-field `errors` map and nothing is persisted.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: missing required field returns 422 naming the field
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_required_field_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/clients",
        serde_json::json!({
            "address": "1 Main St",
            "postcode": "2000",
            "city": "Maribor",
            "country": "Slovenija"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["errors"]["name"].is_array(),
        "errors should name the missing field: {json}"
    );

    // Nothing was persisted.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/clients").await).await;
    assert_eq!(list["total"], 0);
}

// ---------------------------------------------------------------------------
// Test: every violation is reported at once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_violations_reported_together(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/clients", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    let errors = json["errors"].as_object().unwrap();
    for field in ["name", "address", "postcode", "city", "country"] {
        assert!(errors.contains_key(field), "{field} should be reported");
    }
}

// ---------------------------------------------------------------------------
// Test: type and length rules
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrong_type_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/assignments",
        serde_json::json!({
            "work_description": "fix",
            "developer_description": "fix bug",
            "id_clients": "not-a-number",
            "id_statuses": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["id_clients"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_over_long_field_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/statuses",
        serde_json::json!({"name": "a-name-well-beyond-twenty-characters"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reference_fields_must_be_positive(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/userAssignments",
        serde_json::json!({"id_users": 0, "id_assignments": -4}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["id_users"].is_array());
    assert!(json["errors"]["id_assignments"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_email_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/contacts",
        serde_json::json!({
            "firstname": "Ada",
            "lastname": "Lovelace",
            "email": "not-an-email",
            "phone": "5551234",
            "id_client": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["email"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_date_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/activities",
        serde_json::json!({
            "title": "Debugging",
            "start_time": "yesterday",
            "end_time": "2021-04-28 19:00:00",
            "comment": "tracked",
            "id_assignments": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["start_time"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_short_password_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/users",
        serde_json::json!({
            "firstname": "Ada",
            "lastname": "Lovelace",
            "username": "ada",
            "email": "ada@example.com",
            "password": "short",
            "id_users_roles": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["password"].is_array());
}

// ---------------------------------------------------------------------------
// Test: uniqueness
// ---------------------------------------------------------------------------

fn user_payload(username: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "firstname": "Ada",
        "lastname": "Lovelace",
        "username": username,
        "email": email,
        "password": "secret-password",
        "id_users_roles": 1
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = post_json(app, "/api/v1/users", user_payload("ada", "ada@example.com")).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let second = post_json(
        app,
        "/api/v1/users",
        user_payload("ada", "other@example.com"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(second).await;
    assert_eq!(json["errors"]["username"][0], "has already been taken");

    // Exactly one user with that username exists afterwards.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/api/v1/users").await).await;
    assert_eq!(list["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_uniqueness_excludes_own_record(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/users", user_payload("ada", "ada@example.com")).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Re-submitting the user's own username and email must pass.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/users/{id}"),
        user_payload("ada", "ada@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_to_taken_username_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/users", user_payload("ada", "ada@example.com")).await;

    let app = common::build_test_app(pool.clone());
    let grace = body_json(
        post_json(
            app,
            "/api/v1/users",
            user_payload("grace", "grace@example.com"),
        )
        .await,
    )
    .await;
    let grace_id = grace["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/users/{grace_id}"),
        user_payload("ada", "grace@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["errors"]["username"][0], "has already been taken");
}

// ---------------------------------------------------------------------------
// Test: update is full replacement, omission is a violation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/clients",
            serde_json::json!({
                "name": "Full",
                "address": "1 Main St",
                "postcode": "2000",
                "city": "Maribor",
                "country": "Slovenija"
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/clients/{id}"),
        serde_json::json!({"name": "Partial"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The record keeps its prior values.
    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/v1/clients/{id}")).await).await;
    assert_eq!(fetched["name"], "Full");
}

// ---------------------------------------------------------------------------
// Test: unknown payload fields are discarded, not an error
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_fields_are_ignored(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/statuses",
        serde_json::json!({"name": "open", "rank": 99}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "open");
    assert!(json.get("rank").is_none());
}
