//! Persistence layer: connection pool, schema bootstrap, and posting store.
//!
//! Everything talks to PostgreSQL through one [`PoolManager`] owned by the
//! process and shared by handle.

pub mod models;
pub mod pool;
pub mod postgres;
pub mod schema;

pub use models::PostingRecord;
pub use pool::{ConnectionLease, LeakWatch, POOL_NAME, PoolManager, PoolSettings};
pub use postgres::PostingStore;
pub use schema::{BootstrapReport, ensure_schema};
