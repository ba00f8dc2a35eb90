//! Pagination

/// A validated page request: both values are positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Parse raw query values; absent values take the defaults
    ///
    /// Returns `None` when either value is present but not a positive
    /// integer.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u32,
    ) -> Option<Self> {
        let page = parse_positive(page, 1)?;
        let limit = parse_positive(limit, default_limit)?;
        Some(Self { page, limit })
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    /// `ceil(total / limit)`
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

/// Positive integer from a query value, `default` when absent
pub fn parse_positive(raw: Option<&str>, default: u32) -> Option<u32> {
    match raw {
        None => Some(default),
        Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n >= 1),
    }
}
