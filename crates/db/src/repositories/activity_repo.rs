//! Repository for the `activities` table.

use sqlx::PgPool;
use worklog_core::pagination;
use worklog_core::types::DbId;

use crate::models::activity::{Activity, CreateActivity, UpdateActivity};
use crate::models::page::Page;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, start_time, end_time, comment, id_assignments, \
                       created_at, updated_at, deleted_at";

/// Provides CRUD operations for activities.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Insert a new activity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActivity) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (title, start_time, end_time, comment, id_assignments)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.title)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.comment)
            .bind(input.id_assignments)
            .fetch_one(pool)
            .await
    }

    /// Find an activity by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Activity>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM activities WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an activity by ID, including soft-deleted rows. Internal tooling path.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active activities ordered by ID ascending, together
    /// with the total active count.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Activity>(&query)
            .bind(per_page)
            .bind(pagination::offset(page, per_page))
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM activities WHERE deleted_at IS NULL",
        )
        .fetch_one(pool)
        .await?;
        Ok(Page { items, total })
    }

    /// Replace every mutable field of an activity.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActivity,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE activities SET
                title = $2,
                start_time = $3,
                end_time = $4,
                comment = $5,
                id_assignments = $6
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.comment)
            .bind(input.id_assignments)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an activity by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE activities SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
