//! Assignment (work order) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full assignment row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub work_description: String,
    pub developer_description: String,
    pub id_clients: DbId,
    pub id_statuses: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new assignment.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub work_description: String,
    pub developer_description: String,
    pub id_clients: DbId,
    pub id_statuses: DbId,
}

/// DTO for replacing an existing assignment.
#[derive(Debug, Deserialize)]
pub struct UpdateAssignment {
    pub work_description: String,
    pub developer_description: String,
    pub id_clients: DbId,
    pub id_statuses: DbId,
}
