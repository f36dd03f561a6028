//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::persistence::{PoolManager, PostingStore};
use crate::service::PostingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Write path for scraped postings.
    pub posting_service: Arc<PostingService>,
}

impl AppState {
    /// Wires the service stack on top of a pool manager.
    #[must_use]
    pub fn new(pools: Arc<PoolManager>) -> Self {
        let store = PostingStore::new(pools);
        Self {
            posting_service: Arc::new(PostingService::new(store)),
        }
    }
}
