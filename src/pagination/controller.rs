//! Pagination controller
//!
//! Owns the page cursor, the loading flag and the has-more flag, and appends
//! fetched pages to an `ItemStore`.
//!
//! The loading flag is the only guard against overlapping fetches. Acquiring
//! it is an atomic test-and-set, and it is released by `LoadingGuard` on every
//! exit path, including the load future being dropped mid-fetch.

use super::store::ItemStore;
use super::types::{LoadOutcome, LoadStats, SkipReason};
use crate::observer::{BottomObserver, IntersectionEntry};
use crate::source::DataSource;
use futures::Stream;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Drives infinite-scroll loading of a paged data source
pub struct PaginationController {
    source: Arc<dyn DataSource>,
    store: ItemStore,
    page: AtomicU32,
    loading: watch::Sender<bool>,
    has_more: watch::Sender<bool>,
    threshold: f64,
    pages_loaded: AtomicU64,
    items_loaded: AtomicU64,
    failures: AtomicU64,
}

impl PaginationController {
    /// Create a controller starting at page 1
    pub fn new(source: Arc<dyn DataSource>, store: ItemStore) -> Self {
        let (loading, _) = watch::channel(false);
        let (has_more, _) = watch::channel(true);
        Self {
            source,
            store,
            page: AtomicU32::new(1),
            loading,
            has_more,
            threshold: 1.0,
            pages_loaded: AtomicU64::new(0),
            items_loaded: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    /// Start from another page; values below 1 are treated as 1
    #[must_use]
    pub fn with_start_page(self, page: u32) -> Self {
        self.page.store(page.max(1), Ordering::Release);
        self
    }

    /// Visible fraction of the bottom sentinel that counts as reached
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Fetch the next page unless a fetch is in flight or has-more is false
    pub async fn load_more(&self) -> LoadOutcome {
        if !*self.has_more.borrow() {
            debug!("Skipping load, no more data");
            return LoadOutcome::Skipped(SkipReason::NoMore);
        }
        let Some(_guard) = LoadingGuard::acquire(&self.loading) else {
            debug!("Skipping load, fetch already in flight");
            return LoadOutcome::Skipped(SkipReason::InFlight);
        };

        let page = self.page.load(Ordering::Acquire);
        debug!(page, "Loading page");

        match self.source.fetch_page(page).await {
            Ok(records) => {
                let count = records.len();
                let total = self.store.append(records).await;
                if self
                    .page
                    .fetch_update(Ordering::AcqRel, Ordering::Acquire, |p| p.checked_add(1))
                    .is_err()
                {
                    warn!(page, "Page cursor at its maximum, not advancing");
                }
                self.pages_loaded.fetch_add(1, Ordering::Relaxed);
                self.items_loaded.fetch_add(count as u64, Ordering::Relaxed);
                info!(page, count, total, "Loaded page");
                LoadOutcome::Loaded { page, count }
            }
            Err(e) => {
                self.failures.fetch_add(1, Ordering::Relaxed);
                error!(page, error = %e, "Error loading more data");
                LoadOutcome::Failed { page }
            }
        }
    }

    /// Set the has-more flag; a false to true transition loads one page
    pub async fn set_has_more(&self, value: bool) -> Option<LoadOutcome> {
        let previous = self.has_more.send_replace(value);
        if value && !previous {
            Some(self.load_more().await)
        } else {
            None
        }
    }

    /// Watch `target` and load the next page each time it becomes fully visible.
    ///
    /// The watcher lives until the returned `BottomObserver` is disconnected
    /// or dropped.
    pub fn observe_bottom<S>(self: &Arc<Self>, target: S) -> BottomObserver
    where
        S: Stream<Item = IntersectionEntry> + Send + 'static,
    {
        BottomObserver::spawn(Arc::clone(self), target, self.threshold)
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Whether further fetches will be attempted
    pub fn has_more(&self) -> bool {
        *self.has_more.borrow()
    }

    /// Page the next fetch will request
    pub fn page(&self) -> u32 {
        self.page.load(Ordering::Acquire)
    }

    /// Watch the loading flag
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Watch the has-more flag
    pub fn subscribe_has_more(&self) -> watch::Receiver<bool> {
        self.has_more.subscribe()
    }

    /// The store pages are appended to
    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Counters since creation
    pub fn stats(&self) -> LoadStats {
        LoadStats {
            pages_loaded: self.pages_loaded.load(Ordering::Relaxed),
            items_loaded: self.items_loaded.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("page", &self.page())
            .field("loading", &self.is_loading())
            .field("has_more", &self.has_more())
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Holds the loading flag; clears it on drop
struct LoadingGuard<'a> {
    flag: &'a watch::Sender<bool>,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(flag: &'a watch::Sender<bool>) -> Option<Self> {
        let acquired = flag.send_if_modified(|loading| {
            if *loading {
                false
            } else {
                *loading = true;
                true
            }
        });
        acquired.then(|| Self { flag })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}
