//! Status entity model and DTOs.
//!
//! Statuses are a user-managed lookup (e.g. "open", "in progress"), not a
//! fixed enum: assignments reference them by id.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full status row from the `statuses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Status {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new status.
#[derive(Debug, Deserialize)]
pub struct CreateStatus {
    pub name: String,
}

/// DTO for replacing an existing status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatus {
    pub name: String,
}
