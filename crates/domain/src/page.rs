//! Pagination — 1-based page requests and the pages they produce.

/// Page number used when the client sends none or an unusable one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client sends none or an unusable one.
pub const DEFAULT_LIMIT: u32 = 10;

/// A request for one slice of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a request, replacing zero values with the defaults.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Build a request from raw query-string values.
    ///
    /// Missing, non-numeric, zero and negative values all fall back to the
    /// defaults; they are never an error.
    #[must_use]
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(lenient_u32(page), lenient_u32(limit))
    }

    #[must_use]
    pub fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn limit(self) -> u32 {
        self.limit
    }

    /// Number of records to skip: `(page - 1) * limit`.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

fn lenient_u32(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(0)
}

/// Number of pages reported for `total_records` split by `limit`.
///
/// Truncating division: a partially filled last page is not counted, so 25
/// records at 10 per page report 2 pages.
#[must_use]
pub fn total_pages(total_records: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_records / u64::from(limit)
}

/// One slice of a listing together with the size of the whole listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_records: u64,
    pub limit: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_records, self.limit)
    }
}
