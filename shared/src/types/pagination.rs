//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Default number of items per page
pub const DEFAULT_PER_PAGE: u32 = 20;

/// Upper bound for items per page
pub const MAX_PER_PAGE: u32 = 100;

/// Sanitized pagination parameters.
///
/// Construction never yields `per_page == 0`, so the derived page arithmetic
/// below cannot divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// Create pagination with the built-in defaults and bounds
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self::with_bounds(page, per_page, DEFAULT_PER_PAGE, MAX_PER_PAGE)
    }

    /// Create pagination with explicit default and maximum page sizes.
    ///
    /// Missing or zero `per_page` falls back to `default_per_page`; a missing
    /// or zero `page` becomes 1.
    pub fn with_bounds(
        page: Option<u32>,
        per_page: Option<u32>,
        default_per_page: u32,
        max_per_page: u32,
    ) -> Self {
        let max_per_page = max_per_page.max(1);
        let per_page = match per_page {
            Some(0) | None => default_per_page,
            Some(n) => n,
        };

        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.clamp(1, max_per_page),
        }
    }

    /// Calculate the offset for database queries
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Get the limit for database queries
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    /// Current page derived back from the offset (`offset / limit + 1`)
    pub fn current_page(&self) -> u32 {
        (self.offset() / u64::from(self.per_page)) as u32 + 1
    }

    /// Number of pages needed to show `total` items (0 when there are none)
    pub fn last_page(&self, total: u64) -> u32 {
        total.div_ceil(u64::from(self.per_page)) as u32
    }
}
