// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # feedscroll
//!
//! Infinite-scroll pagination over paged JSON listing APIs, with a small
//! terminal front end for the randomuser.me profile feed.
//!
//! ## Features
//!
//! - **Guarded Loading**: At most one page fetch in flight, released on every exit path
//! - **Bottom Observer**: Loads the next page when the end of the list becomes visible
//! - **Owned Store**: The accumulated list is a handle you create and share, not a global
//! - **Quiet Failures**: A failed page is logged and requested again on the next trigger
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use feedscroll::config::FeedConfig;
//! use feedscroll::pagination::{ItemStore, PaginationController};
//! use feedscroll::source::HttpDataSource;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> feedscroll::Result<()> {
//!     let source = Arc::new(HttpDataSource::from_config(&FeedConfig::default())?);
//!     let controller = PaginationController::new(source, ItemStore::new());
//!
//!     controller.load_more().await;
//!     controller.load_more().await;
//!     assert_eq!(controller.page(), 3);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────┐ visible ┌──────────────────────┐ fetch_page(N) ┌────────────────┐
//! │ BottomObserver │────────▶│ PaginationController │──────────────▶│ DataSource     │
//! │ (Viewport)     │         │ loading / has_more / │◀──────────────│ HttpDataSource │
//! └────────────────┘         │ page cursor          │  Vec<Record>  └────────────────┘
//!                            └──────────┬───────────┘
//!                                       │ append
//!                                 ┌─────▼─────┐
//!                                 │ ItemStore │──▶ renderer
//!                                 └───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Feed configuration
pub mod config;

/// HTTP client with request pacing
pub mod http;

/// Data sources
pub mod source;

/// Pagination controller and item store
pub mod pagination;

/// Bottom-of-content observer
pub mod observer;

/// Record output
pub mod output;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::FeedConfig;
pub use observer::{BottomObserver, IntersectionEntry, Viewport};
pub use pagination::{ItemStore, LoadOutcome, PaginationController};
pub use source::{DataSource, HttpDataSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
