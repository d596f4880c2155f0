//! Pagination arithmetic shared by repositories and list handlers.
//!
//! Pages are 1-based. `per_page` defaults to [`DEFAULT_PER_PAGE`] and is
//! clamped to [`MAX_PER_PAGE`]; a page past the end of the result set is a
//! valid (empty) page, never an error.

/// Items per page when the caller does not specify `per_page`.
pub const DEFAULT_PER_PAGE: i64 = 15;

/// Upper bound on `per_page` to keep list queries bounded.
pub const MAX_PER_PAGE: i64 = 100;

/// Clamp a requested page number to the valid range (>= 1).
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a requested page size to `1..=MAX_PER_PAGE`, defaulting when absent.
pub fn clamp_per_page(per_page: Option<i64>) -> i64 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

/// Row offset for a 1-based page number.
pub fn offset(page: i64, per_page: i64) -> i64 {
    (page - 1) * per_page
}

/// Total number of pages for a result set. Always at least 1, so an empty
/// set still reports one (empty) page.
pub fn last_page(total: i64, per_page: i64) -> i64 {
    ((total + per_page - 1) / per_page).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-3)), 1);
        assert_eq!(clamp_page(Some(7)), 7);
    }

    #[test]
    fn per_page_defaults_and_clamps() {
        assert_eq!(clamp_per_page(None), DEFAULT_PER_PAGE);
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(2)), 2);
        assert_eq!(clamp_per_page(Some(10_000)), MAX_PER_PAGE);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(offset(1, 15), 0);
        assert_eq!(offset(2, 15), 15);
        assert_eq!(offset(3, 2), 4);
    }

    #[test]
    fn last_page_rounds_up() {
        assert_eq!(last_page(0, 15), 1);
        assert_eq!(last_page(15, 15), 1);
        assert_eq!(last_page(16, 15), 2);
        assert_eq!(last_page(3, 2), 2);
    }
}
