//! Repository for the `users_roles` table.

use sqlx::PgPool;
use worklog_core::pagination;
use worklog_core::types::DbId;

use crate::models::page::Page;
use crate::models::user_role::{CreateUserRole, UpdateUserRole, UserRole};

const COLUMNS: &str = "id, role, created_at, updated_at, deleted_at";

/// Provides CRUD operations for user roles.
pub struct UserRoleRepo;

impl UserRoleRepo {
    /// Insert a new role, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUserRole) -> Result<UserRole, sqlx::Error> {
        let query = format!("INSERT INTO users_roles (role) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, UserRole>(&query)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a role by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserRole>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users_roles WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, UserRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a role by ID, including soft-deleted rows. Internal tooling path.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users_roles WHERE id = $1");
        sqlx::query_as::<_, UserRole>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active roles ordered by ID ascending, together with
    /// the total active count.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<UserRole>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users_roles WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, UserRole>(&query)
            .bind(per_page)
            .bind(pagination::offset(page, per_page))
            .fetch_all(pool)
            .await?;
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users_roles WHERE deleted_at IS NULL",
        )
        .fetch_one(pool)
        .await?;
        Ok(Page { items, total })
    }

    /// Replace every mutable field of a role.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUserRole,
    ) -> Result<Option<UserRole>, sqlx::Error> {
        let query = format!(
            "UPDATE users_roles SET role = $2
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserRole>(&query)
            .bind(id)
            .bind(&input.role)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a role by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users_roles SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
