//! Shared response envelope types for API handlers.

use pokevote_core::paging::PageMeta;
use serde::Serialize;

/// Paginated `{ "data": [...], "meta": { ... } }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(PageResponse { data: items, meta: PageMeta::new(page, total) }))
/// ```
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
