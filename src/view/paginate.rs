//! Fixed-size pagination over an ordered sequence

use serde::{Deserialize, Serialize};

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Number of pages needed for `len` items, 0 when there are no items
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 { 0 } else { len.div_ceil(page_size.max(1)) }
}

/// Slice out one 1-based page
///
/// Returns `[(page - 1) * size, page * size)` clamped to the sequence. An
/// out-of-range page yields an empty slice. Page 0 is read as page 1 and a
/// page size of 0 as 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = (page.max(1) - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Current page and page size of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// Current page (starts at 1)
    pub page: usize,

    /// Fixed number of rows per page
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Jump to a page; out-of-range pages are kept and render empty
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Back to the first page
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move forward unless already on the last page
    pub fn next(&mut self, total_items: usize) {
        if self.page < total_pages(total_items, self.page_size) {
            self.page += 1;
        }
    }

    /// Move back unless already on the first page
    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Index of the first row of the current page
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// One page of an ordered sequence, with its counts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn of(items: &'a [T], state: PageState) -> Self {
        Self {
            items: paginate(items, state.page, state.page_size),
            page: state.page,
            page_size: state.page_size,
            total_items: items.len(),
            total_pages: total_pages(items.len(), state.page_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
