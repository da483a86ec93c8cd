//! Query parameters and pagination utilities

use crate::core::error::Result;
use crate::view::filter::FilterCriteria;
use crate::view::sort::SortKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Largest page size a query may request
pub const MAX_PAGE_SIZE: usize = 100;

/// Query parameters for pagination, filtering and sorting
///
/// This is the shape list screens send when the user types in the search
/// box, ticks a status chip or clicks a column header.
///
/// # Example
/// ```text
/// page=2&limit=10
/// filter={"q": "edf", "status": ["pending", "matched"]}
/// filter={"abs_amount>=": 100, "date>=": "2024-01-01"}&sort=amount:desc
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page, when the caller overrides the view's size
    pub limit: Option<usize>,

    /// Filters as a JSON object
    ///
    /// # Format
    /// - Free text: `{"q": "edf"}`
    /// - Membership: `{"field": "value"}` or `{"field": ["a", "b"]}`
    /// - Range: `{"field>=": value, "field<=": value}` with a number or an ISO date
    pub filter: Option<String>,

    /// Sort field and direction
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    pub sort: Option<String>,
}

fn default_page() -> usize {
    1
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get the requested page size, clamped to `1..=MAX_PAGE_SIZE`
    pub fn limit(&self) -> Option<usize> {
        self.limit.map(|limit| limit.clamp(1, MAX_PAGE_SIZE))
    }

    /// Parse the filter JSON string into a Value
    pub fn filter_value(&self) -> Result<Option<Value>> {
        match self.filter.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }

    /// Parse the filter into criteria, `None` when no filter was sent
    pub fn filter_criteria(&self) -> Result<Option<FilterCriteria>> {
        self.filter_value()?
            .map(|value| FilterCriteria::from_json(&value))
            .transpose()
    }

    /// Parse the sort expression, `None` when no sort was sent
    pub fn sort_key(&self) -> Result<Option<SortKey>> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(expression) => SortKey::parse(expression).map(Some),
        }
    }
}

/// Paginated response structure
///
/// An owned copy of one page, with metadata about pagination state.
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    /// The records of the current page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata consumed by pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure page and limit are at least 1
        let page = page.max(1);
        let limit = limit.max(1);
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages: crate::view::paginate::total_pages(total, limit),
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}
