//! Page-number pagination for catalog listings.
//!
//! Clients address pages by 1-based number and page size rather than raw
//! offsets. Out-of-range input is normalized instead of rejected so a stale
//! or hand-edited URL still produces a sensible page.

use serde::Serialize;

/// Page size used when the client does not supply one.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Largest page size a client may request.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A normalized page request: `page >= 1` and `1 <= limit <= MAX_PAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Build a page request from raw query values.
    ///
    /// Missing or non-positive values fall back to page 1 and
    /// [`DEFAULT_PAGE_LIMIT`]; oversized limits are clamped.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let limit = limit
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT);
        Self { page, limit }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Number of pages needed to show `total_items` at `limit` per page.
pub fn total_pages(total_items: i64, limit: i64) -> i64 {
    if total_items <= 0 || limit <= 0 {
        return 0;
    }
    (total_items + limit - 1) / limit
}

/// Paging metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
}

impl PageMeta {
    pub fn new(request: PageRequest, total_items: i64) -> Self {
        Self {
            current_page: request.page,
            total_pages: total_pages(total_items, request.limit),
            total_items,
        }
    }
}
