//! Bottom-of-content observer
//!
//! A target element is modelled as a stream of `IntersectionEntry` values,
//! one per visibility change reported by whatever renders it. The observer
//! is edge triggered: it fires when the target *becomes* visible at or above
//! the threshold, not on every report while it stays visible.
//!
//! - `IntersectionEntry` - one visibility report
//! - `BottomObserver` - scoped registration returned by `observe_bottom`
//! - `Viewport` - computes entries for a line-oriented view

mod viewport;

pub use viewport::Viewport;

use crate::pagination::PaginationController;
use futures::{Stream, StreamExt};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

/// One visibility report for an observed target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    /// Whether any part of the target is inside the viewport
    pub is_intersecting: bool,
    /// Visible fraction of the target, 0.0 to 1.0
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    /// Target fully visible
    pub fn visible() -> Self {
        Self {
            is_intersecting: true,
            intersection_ratio: 1.0,
        }
    }

    /// Target out of view
    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }

    /// Target partly visible
    pub fn partial(ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        Self {
            is_intersecting: ratio > 0.0,
            intersection_ratio: ratio,
        }
    }

    /// Whether this entry counts as reaching the threshold
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio >= threshold
    }
}

/// Registration of a bottom watcher.
///
/// Dropping it, or calling `disconnect`, stops watching. Loads the watcher
/// already started are left to finish.
#[derive(Debug)]
pub struct BottomObserver {
    task: JoinHandle<()>,
}

impl BottomObserver {
    pub(crate) fn spawn<S>(
        controller: Arc<PaginationController>,
        target: S,
        threshold: f64,
    ) -> Self
    where
        S: Stream<Item = IntersectionEntry> + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut target = Box::pin(target);
            let mut edge = EdgeTrigger::new(threshold);
            while let Some(entry) = target.next().await {
                if edge.observe(&entry) {
                    debug!(ratio = entry.intersection_ratio, "Bottom reached");
                    let controller = Arc::clone(&controller);
                    // Each crossing runs its own load; overlapping ones hit the loading guard
                    tokio::spawn(async move {
                        controller.load_more().await;
                    });
                }
            }
            debug!("Observed target closed");
        });
        Self { task }
    }

    /// Wait until the observed target stream ends
    pub async fn closed(mut self) {
        let _ = (&mut self.task).await;
    }

    /// Stop watching
    pub fn disconnect(self) {
        self.task.abort();
    }

    /// Whether the watcher is still running
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for BottomObserver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Fires when entries cross from below the threshold to at or above it
#[derive(Debug, Clone, Copy)]
pub(crate) struct EdgeTrigger {
    threshold: f64,
    reached: bool,
}

impl EdgeTrigger {
    pub(crate) fn new(threshold: f64) -> Self {
        Self {
            threshold,
            reached: false,
        }
    }

    pub(crate) fn observe(&mut self, entry: &IntersectionEntry) -> bool {
        let now = entry.meets(self.threshold);
        let fire = now && !self.reached;
        self.reached = now;
        fire
    }
}
