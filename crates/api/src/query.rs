//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&per_page=`).
///
/// Used by every paginated list handler. Values are clamped via
/// `worklog_core::pagination` before reaching the repository layer.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
