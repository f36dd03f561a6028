//! Service layer: business logic orchestration.
//!
//! [`PostingService`] resolves the employer, serializes the payload and
//! hands it to the [`crate::persistence::PostingStore`].

pub mod posting_service;

pub use posting_service::PostingService;
