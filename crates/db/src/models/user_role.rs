//! User role entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full role row from the `users_roles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRole {
    pub id: DbId,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new role.
#[derive(Debug, Deserialize)]
pub struct CreateUserRole {
    pub role: String,
}

/// DTO for replacing an existing role.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRole {
    pub role: String,
}
