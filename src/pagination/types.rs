//! Pagination value types
//!
//! Immutable per-request values shared by the window calculator,
//! the paginator, and the record sources.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// First page number used by the public helpers
pub const FIRST_PAGE: i64 = 1;

/// Default number of pages shown next to the first and last page
pub const DEFAULT_OUTER_WINDOW: u32 = 1;

/// Default number of pages shown on each side of the current page
pub const DEFAULT_INNER_WINDOW: u32 = 3;

/// Marker rendered for omitted page numbers
pub const GAP_MARKER: &str = "...";

/// One entry of the rendered page sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayToken {
    /// A page number to link to
    Page(i64),
    /// Omitted pages between two shown pages
    Gap,
}

impl DisplayToken {
    /// Page number, if this token is a page
    pub fn page(&self) -> Option<i64> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Gap => None,
        }
    }

    /// Check if this token is a gap marker
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl fmt::Display for DisplayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{n}"),
            Self::Gap => f.write_str(GAP_MARKER),
        }
    }
}

// Pages serialize as bare numbers and gaps as "...", e.g. [1, 2, "...", 9]
impl Serialize for DisplayToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_i64(*n),
            Self::Gap => serializer.serialize_str(GAP_MARKER),
        }
    }
}

/// Offset/limit pair for fetching one page of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSpec {
    /// Records to skip. Negative when the page number is below 1.
    pub offset: i64,
    /// Records to return
    pub limit: u32,
}

/// Window sizes for the page sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Pages shown adjacent to the first and last page
    pub outer_window: u32,
    /// Pages shown on each side of the current page
    pub inner_window: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            outer_window: DEFAULT_OUTER_WINDOW,
            inner_window: DEFAULT_INNER_WINDOW,
        }
    }
}

impl WindowConfig {
    /// Create a window config
    pub fn new(outer_window: u32, inner_window: u32) -> Self {
        Self {
            outer_window,
            inner_window,
        }
    }
}

/// Current page, page size and total record count for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Page being viewed (1-based, not validated)
    pub current_page: i64,
    /// Records per page
    pub page_size: u32,
    /// Records across all pages
    pub total_count: u64,
}

impl PaginationRequest {
    /// Create a pagination request
    pub fn new(current_page: i64, page_size: u32, total_count: u64) -> Self {
        Self {
            current_page,
            page_size,
            total_count,
        }
    }

    /// Last page number, 0 when there are no records
    pub fn last_page(&self) -> crate::Result<i64> {
        super::compute_last_page(self.total_count, self.page_size)
    }

    /// Offset/limit for the current page
    pub fn fetch_spec(&self) -> FetchSpec {
        super::compute_fetch_spec(self.current_page, self.page_size)
    }
}
