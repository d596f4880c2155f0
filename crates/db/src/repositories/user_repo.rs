//! Repository for the `users` table.

use sqlx::PgPool;
use worklog_core::pagination;
use worklog_core::types::DbId;

use crate::models::page::Page;
use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, firstname, lastname, username, email, password, id_users_roles, \
                       created_at, updated_at, deleted_at";

/// Provides CRUD operations for users, plus the uniqueness probes the
/// validation layer needs for `username` and `email`.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// The partial unique indexes on `username`/`email` backstop the
    /// pre-validation probes under concurrent creates; a losing racer gets
    /// a database error with a `uq_`-prefixed constraint.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (firstname, lastname, username, email, password, id_users_roles)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.firstname)
            .bind(&input.lastname)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password)
            .bind(input.id_users_roles)
            .fetch_one(pool)
            .await
    }

    /// Find a user by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by ID, including soft-deleted rows. Internal tooling path.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active users ordered by ID ascending, together with
    /// the total active count.
    pub async fn list(pool: &PgPool, page: i64, per_page: i64) -> Result<Page<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, User>(&query)
            .bind(per_page)
            .bind(pagination::offset(page, per_page))
            .fetch_all(pool)
            .await?;
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE deleted_at IS NULL")
                .fetch_one(pool)
                .await?;
        Ok(Page { items, total })
    }

    /// Replace every mutable field of a user.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                firstname = $2,
                lastname = $3,
                username = $4,
                email = $5,
                password = $6,
                id_users_roles = $7
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.firstname)
            .bind(&input.lastname)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password)
            .bind(input.id_users_roles)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a user by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an active user other than `exclude` already holds this username.
    pub async fn username_taken(
        pool: &PgPool,
        username: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM users
                WHERE username = $1
                  AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(username)
        .bind(exclude)
        .fetch_one(pool)
        .await
    }

    /// Whether an active user other than `exclude` already holds this email.
    pub async fn email_taken(
        pool: &PgPool,
        email: &str,
        exclude: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM users
                WHERE email = $1
                  AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(email)
        .bind(exclude)
        .fetch_one(pool)
        .await
    }
}
