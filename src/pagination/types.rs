//! Pagination types
//!
//! Outcomes and statistics reported by the pagination controller.

/// Why a `load_more` call did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another fetch is still in flight
    InFlight,
    /// The has-more flag is false
    NoMore,
}

/// Result of one `load_more` call
///
/// Fetch errors are logged and swallowed by the controller; callers only
/// learn that the page failed, never why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was fetched and its records appended
    Loaded {
        /// Page that was fetched
        page: u32,
        /// Number of records appended
        count: usize,
    },
    /// The page fetch failed; the cursor was not advanced
    Failed {
        /// Page that failed
        page: u32,
    },
    /// No fetch was attempted
    Skipped(SkipReason),
}

impl LoadOutcome {
    /// Check if a page was loaded
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Check if the data source was called
    pub fn did_fetch(&self) -> bool {
        !matches!(self, Self::Skipped(_))
    }
}

/// Counters kept by the controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Pages fetched successfully
    pub pages_loaded: u64,
    /// Records appended
    pub items_loaded: u64,
    /// Failed fetches
    pub failures: u64,
}
