//! Repository for the `assignments` table.

use sqlx::PgPool;
use worklog_core::pagination;
use worklog_core::types::DbId;

use crate::models::assignment::{Assignment, CreateAssignment, UpdateAssignment};
use crate::models::page::Page;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, work_description, developer_description, id_clients, id_statuses, \
                       created_at, updated_at, deleted_at";

/// Provides CRUD operations for assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert a new assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (work_description, developer_description, id_clients, id_statuses)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(&input.work_description)
            .bind(&input.developer_description)
            .bind(input.id_clients)
            .bind(input.id_statuses)
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM assignments WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an assignment by ID, including soft-deleted rows. Internal tooling path.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active assignments ordered by ID ascending, together
    /// with the total active count.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignments WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Assignment>(&query)
            .bind(per_page)
            .bind(pagination::offset(page, per_page))
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM assignments WHERE deleted_at IS NULL",
        )
        .fetch_one(pool)
        .await?;
        Ok(Page { items, total })
    }

    /// List every active assignment for one client, unpaginated.
    ///
    /// An unknown client id simply yields an empty list.
    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assignments
             WHERE id_clients = $1 AND deleted_at IS NULL
             ORDER BY id"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of an assignment.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAssignment,
    ) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!(
            "UPDATE assignments SET
                work_description = $2,
                developer_description = $3,
                id_clients = $4,
                id_statuses = $5
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .bind(&input.work_description)
            .bind(&input.developer_description)
            .bind(input.id_clients)
            .bind(input.id_statuses)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an assignment by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE assignments SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
