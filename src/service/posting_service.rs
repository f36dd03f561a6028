//! Posting service: the write entry point behind the HTTP handlers.

use crate::domain::{Company, ScrapedData};
use crate::error::ApiError;
use crate::persistence::PostingStore;

/// Validates a scraper payload and stores it as its company's current
/// document.
///
/// Identity is resolved before any connection is borrowed, so rejected
/// payloads never reach the store.
#[derive(Debug, Clone)]
pub struct PostingService {
    store: PostingStore,
}

impl PostingService {
    /// Creates a new `PostingService`.
    #[must_use]
    pub fn new(store: PostingStore) -> Self {
        Self { store }
    }

    /// Returns a reference to the inner [`PostingStore`].
    #[must_use]
    pub fn store(&self) -> &PostingStore {
        &self.store
    }

    /// Stores `data` as the latest postings for its company.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownCompany`] for a company outside the known
    /// set, [`ApiError::Internal`] if the payload cannot be serialized, and
    /// [`ApiError::PersistenceError`] if the store reports failure.
    pub async fn submit(&self, data: &ScrapedData) -> Result<Company, ApiError> {
        let company = Company::resolve(&data.company_name)?;
        let document = data
            .to_document()
            .map_err(|e| ApiError::Internal(format!("serialize payload: {e}")))?;

        if !self.store.upsert(company, &document).await {
            return Err(ApiError::PersistenceError);
        }

        tracing::info!(%company, total_jobs = data.total_jobs, "stored scraped postings");
        Ok(company)
    }
}
