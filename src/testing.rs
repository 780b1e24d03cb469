//! Test doubles shared by unit tests

use crate::error::{Error, Result};
use crate::source::DataSource;
use crate::types::Record;
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// In-memory data source with scripted failures and an optional gate
#[derive(Debug)]
pub(crate) struct MockSource {
    page_size: usize,
    fail_next: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
    requested: Mutex<Vec<u32>>,
}

impl MockSource {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            page_size,
            fail_next: AtomicUsize::new(0),
            gate: None,
            calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// The next `n` fetches fail with a 503
    pub(crate) fn failing(self, n: usize) -> Self {
        self.fail_next.store(n, Ordering::SeqCst);
        self
    }

    /// Every fetch waits for a permit on `gate`
    pub(crate) fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for MockSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Record>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(page);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| Error::Other(e.to_string()))?
                .forget();
        }

        let should_fail = self
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(Error::http_status(503, "Service Unavailable"));
        }

        Ok((0..self.page_size)
            .map(|index| json!({ "page": page, "index": index }))
            .collect())
    }
}
