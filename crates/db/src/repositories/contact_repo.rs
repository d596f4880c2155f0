//! Repository for the `contacts` table.

use sqlx::PgPool;
use worklog_core::pagination;
use worklog_core::types::DbId;

use crate::models::contact::{Contact, CreateContact, UpdateContact};
use crate::models::page::Page;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, firstname, lastname, email, phone, id_client, created_at, updated_at, deleted_at";

/// Provides CRUD operations for contacts.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (firstname, lastname, email, phone, id_client)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.firstname)
            .bind(&input.lastname)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.id_client)
            .fetch_one(pool)
            .await
    }

    /// Find a contact by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a contact by ID, including soft-deleted rows. Internal tooling path.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts WHERE id = $1");
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of active contacts ordered by ID ascending, together
    /// with the total active count.
    pub async fn list(
        pool: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<Page<Contact>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contacts WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let items = sqlx::query_as::<_, Contact>(&query)
            .bind(per_page)
            .bind(pagination::offset(page, per_page))
            .fetch_all(pool)
            .await?;
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts WHERE deleted_at IS NULL")
                .fetch_one(pool)
                .await?;
        Ok(Page { items, total })
    }

    /// Replace every mutable field of a contact.
    ///
    /// Returns `None` if no active row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContact,
    ) -> Result<Option<Contact>, sqlx::Error> {
        let query = format!(
            "UPDATE contacts SET
                firstname = $2,
                lastname = $3,
                email = $4,
                phone = $5,
                id_client = $6
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(id)
            .bind(&input.firstname)
            .bind(&input.lastname)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.id_client)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a contact by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE contacts SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
