//! Pagination module
//!
//! Infinite-scroll loading over a `DataSource`.
//!
//! # Overview
//!
//! - `PaginationController` - page cursor, loading guard, has-more flag
//! - `ItemStore` - the accumulated record list, shared by handle
//! - `LoadOutcome` / `LoadStats` - what a load did, and running totals
//!
//! The page cursor only moves forward, by one per successful page. A failed
//! page is retried only when something calls `load_more` again.

mod controller;
mod store;
mod types;

pub use controller::PaginationController;
pub use store::ItemStore;
pub use types::{LoadOutcome, LoadStats, SkipReason};
