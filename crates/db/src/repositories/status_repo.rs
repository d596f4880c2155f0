//! Repository for the `statuses` table.

use sqlx::PgPool;
use worklog_core::pagination;
use worklog_core::types::DbId;

use crate::models::page::Page;
use crate::models::status::{CreateStatus, Status, UpdateStatus};

const COLUMNS: &str = "id, name, created_at, updated_at, deleted_at";

/// Provides CRUD operations for statuses.
pub struct StatusRepo;

impl StatusRepo {
    /// Insert a new status, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStatus) -> Result<Status, sqlx::Error> {
        let query = format!("INSERT INTO statuses (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Status>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a status by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a status by ID, including soft-deleted rows. Internal tooling path.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM statuses WHERE id = $1");
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active statuses ordered by ID ascending, together
    /// with the total active count.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<Status>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM statuses WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Status>(&query)
            .bind(per_page)
            .bind(pagination::offset(page, per_page))
            .fetch_all(pool)
            .await?;
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM statuses WHERE deleted_at IS NULL")
                .fetch_one(pool)
                .await?;
        Ok(Page { items, total })
    }

    /// Replace every mutable field of a status.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStatus,
    ) -> Result<Option<Status>, sqlx::Error> {
        let query = format!(
            "UPDATE statuses SET name = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Status>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a status by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE statuses SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
