//! Contact entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full contact row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contact {
    pub id: DbId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub id_client: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new contact.
#[derive(Debug, Deserialize)]
pub struct CreateContact {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub id_client: DbId,
}

/// DTO for replacing an existing contact.
#[derive(Debug, Deserialize)]
pub struct UpdateContact {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub id_client: DbId,
}
