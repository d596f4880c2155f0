//! Activity (time entry) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full activity row from the `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Activity {
    pub id: DbId,
    pub title: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub comment: String,
    pub id_assignments: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new activity. The time fields arrive already coerced
/// to RFC 3339 by the validation layer.
#[derive(Debug, Deserialize)]
pub struct CreateActivity {
    pub title: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub comment: String,
    pub id_assignments: DbId,
}

/// DTO for replacing an existing activity.
#[derive(Debug, Deserialize)]
pub struct UpdateActivity {
    pub title: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub comment: String,
    pub id_assignments: DbId,
}
