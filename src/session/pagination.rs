//! Page arithmetic over the current result list.
//!
//! Only the current page and the page size are stored; the page count and
//! the visible window are derived from the result length on every call.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Contacts shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Current page (1-based) and fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    /// Create pagination on page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `total` results; 0 when there are none.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Go back to page 1.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move to page `n`, clamped into `[1, total_pages]`.
    ///
    /// With no results the page stays at 1 and nothing is visible.
    pub fn set_page(&mut self, n: usize, total: usize) {
        let last = self.total_pages(total).max(1);
        self.page = n.clamp(1, last);
    }

    /// Index range of the visible slice, empty when out of range.
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= total {
            return 0..0;
        }
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Whether the "Previous" control is enabled.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether the "Next" control is enabled.
    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    /// The "Showing X to Y of N results" summary, `None` with no results.
    pub fn summary(&self, total: usize) -> Option<PageSummary> {
        let window = self.window(total);
        if window.is_empty() {
            return None;
        }
        Some(PageSummary {
            first: window.start + 1,
            last: window.end,
            total,
        })
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// 1-based bounds of the visible rows within the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.first, self.last, self.total
        )
    }
}
