//! Data source module
//!
//! A data source answers one question: "give me page N". It reports no
//! totals and no next cursor, so the pagination layer cannot learn from it
//! that the feed is exhausted.
//!
//! - `DataSource` - the capability consumed by the pagination controller
//! - `HttpDataSource` - a paged JSON listing endpoint (randomuser.me by default)

mod listing;

pub use listing::{extract_records, HttpDataSource};

use crate::error::Result;
use crate::types::Record;
use async_trait::async_trait;

/// Fetches one page of records
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch page `page` (numbered from 1)
    async fn fetch_page(&self, page: u32) -> Result<Vec<Record>>;
}
