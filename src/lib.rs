//! # careerminer-api
//!
//! Ingestion service for job postings scraped from a fixed set of employers.
//!
//! Scrapers post one payload per employer per run. The service resolves the
//! employer against a closed registry and stores the payload in PostgreSQL as
//! that employer's current JSON document, overwriting the previous one.
//!
//! ## Architecture
//!
//! ```text
//! Scrapers (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PostingService (service/)
//!     ├── Company registry (domain/)
//!     │
//!     ├── PostingStore (persistence/)
//!     ├── PoolManager + schema bootstrap (persistence/)
//!     │
//!     └── PostgreSQL
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
