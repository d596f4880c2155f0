//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// Full client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a new client.
#[derive(Debug, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}

/// DTO for replacing an existing client.
#[derive(Debug, Deserialize)]
pub struct UpdateClient {
    pub name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}
