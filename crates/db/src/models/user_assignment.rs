//! User-to-assignment link entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full link row from the `users_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserAssignment {
    pub id: DbId,
    pub id_users: DbId,
    pub id_assignments: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new link.
#[derive(Debug, Deserialize)]
pub struct CreateUserAssignment {
    pub id_users: DbId,
    pub id_assignments: DbId,
}

/// DTO for replacing an existing link.
#[derive(Debug, Deserialize)]
pub struct UpdateUserAssignment {
    pub id_users: DbId,
    pub id_assignments: DbId,
}
