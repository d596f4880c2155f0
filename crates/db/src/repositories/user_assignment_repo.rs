//! Repository for the `users_assignments` link table.

use sqlx::PgPool;
use worklog_core::pagination;
use worklog_core::types::DbId;

use crate::models::page::Page;
use crate::models::user_assignment::{CreateUserAssignment, UpdateUserAssignment, UserAssignment};

const COLUMNS: &str = "id, id_users, id_assignments, created_at, updated_at, deleted_at";

/// Provides CRUD operations for user-to-assignment links.
pub struct UserAssignmentRepo;

impl UserAssignmentRepo {
    /// Insert a new link, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserAssignment,
    ) -> Result<UserAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO users_assignments (id_users, id_assignments)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserAssignment>(&query)
            .bind(input.id_users)
            .bind(input.id_assignments)
            .fetch_one(pool)
            .await
    }

    /// Find a link by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserAssignment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users_assignments WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, UserAssignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a link by ID, including soft-deleted rows. Internal tooling path.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserAssignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users_assignments WHERE id = $1");
        sqlx::query_as::<_, UserAssignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active links ordered by ID ascending, together with
    /// the total active count.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<UserAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users_assignments WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, UserAssignment>(&query)
            .bind(per_page)
            .bind(pagination::offset(page, per_page))
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users_assignments WHERE deleted_at IS NULL",
        )
        .fetch_one(pool)
        .await?;
        Ok(Page { items, total })
    }

    /// Replace every mutable field of a link.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserAssignment,
    ) -> Result<Option<UserAssignment>, sqlx::Error> {
        let query = format!(
            "UPDATE users_assignments SET
                id_users = $2,
                id_assignments = $3
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserAssignment>(&query)
            .bind(id)
            .bind(input.id_users)
            .bind(input.id_assignments)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a link by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users_assignments SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
