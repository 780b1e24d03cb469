//! Accumulated record list
//!
//! The store is an explicitly owned handle: whoever builds the view creates
//! one and hands clones to the controller and the renderer. Clones share the
//! same list.

use crate::types::Record;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};

/// Shared, append-only list of records in arrival order
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Arc<RwLock<Vec<Record>>>,
    len: Arc<watch::Sender<usize>>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        let (len, _) = watch::channel(0);
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            len: Arc::new(len),
        }
    }

    /// Append records, preserving their order; returns the new length
    pub async fn append(&self, records: Vec<Record>) -> usize {
        let mut items = self.items.write().await;
        items.extend(records);
        let len = items.len();
        self.len.send_replace(len);
        len
    }

    /// Number of records held
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Check if the store is empty
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Copy of every record
    pub async fn snapshot(&self) -> Vec<Record> {
        self.items.read().await.clone()
    }

    /// Copy of the records in `start..end`, clamped to the list
    pub async fn slice(&self, start: usize, end: usize) -> Vec<Record> {
        let items = self.items.read().await;
        let end = end.min(items.len());
        let start = start.min(end);
        items[start..end].to_vec()
    }

    /// Watch the record count
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.len.subscribe()
    }
}
