//! Shared response envelope types for API handlers.

use serde::Serialize;
use worklog_db::models::page::Page;

/// Paginated list envelope: the page of items under `data` plus the
/// metadata a client needs to walk the set.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub last_page: i64,
}

impl<T: Serialize> PageResponse<T> {
    /// Build the envelope from a repository page and the clamped paging
    /// parameters the query actually ran with.
    pub fn new(page: Page<T>, current_page: i64, per_page: i64) -> Self {
        PageResponse {
            last_page: worklog_core::pagination::last_page(page.total, per_page),
            data: page.items,
            current_page,
            per_page,
            total: page.total,
        }
    }
}
