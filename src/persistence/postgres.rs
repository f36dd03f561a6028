//! Posting writes against PostgreSQL.
//!
//! Both write paths borrow one connection, run one parameterized statement,
//! and report success as a `bool`. Store errors are logged here and never
//! passed up.

use std::sync::Arc;

use chrono::NaiveDateTime;

use super::models::PostingRecord;
use super::pool::PoolManager;
use crate::domain::Company;
use crate::error::StoreError;

const INSERT_POSTING: &str = "INSERT INTO data.postings (company_id, data) \
     VALUES ((SELECT id FROM company.companies WHERE name = $1), $2::jsonb)";

const UPSERT_POSTING: &str = "INSERT INTO data.postings (company_id, data) \
     VALUES ((SELECT id FROM company.companies WHERE name = $1), $2::jsonb) \
     ON CONFLICT (company_id) DO UPDATE \
     SET data = EXCLUDED.data, updated_date = NOW()";

const SELECT_POSTING: &str = "SELECT p.data::text, p.created_date, p.updated_date \
     FROM data.postings p \
     JOIN company.companies c ON c.id = p.company_id \
     WHERE c.name = $1";

const COUNT_POSTINGS: &str = "SELECT COUNT(*) \
     FROM data.postings p \
     JOIN company.companies c ON c.id = p.company_id \
     WHERE c.name = $1";

/// Keyed store of one posting document per company.
#[derive(Debug, Clone)]
pub struct PostingStore {
    pools: Arc<PoolManager>,
}

impl PostingStore {
    /// Creates a store that borrows connections from `pools`.
    #[must_use]
    pub fn new(pools: Arc<PoolManager>) -> Self {
        Self { pools }
    }

    /// Returns the pool manager backing this store.
    #[must_use]
    pub fn pools(&self) -> &Arc<PoolManager> {
        &self.pools
    }

    /// Writes the first document for `company`.
    ///
    /// Returns `true` iff exactly one row was inserted. A company that
    /// already has a document violates the key and yields `false`.
    pub async fn insert(&self, company: Company, document: &str) -> bool {
        match self.try_insert(company, document).await {
            Ok(1) => {
                tracing::info!(%company, "posting inserted");
                true
            }
            Ok(rows) => {
                tracing::warn!(%company, rows, "posting insert affected unexpected row count");
                false
            }
            Err(e) => {
                tracing::error!(%company, error = %e, "posting insert failed");
                false
            }
        }
    }

    /// Writes `document` for `company`, replacing any existing document and
    /// refreshing its update time.
    ///
    /// Returns `true` iff exactly one row was inserted or updated.
    pub async fn upsert(&self, company: Company, document: &str) -> bool {
        match self.try_upsert(company, document).await {
            Ok(1) => {
                tracing::info!(%company, "posting upserted");
                true
            }
            Ok(rows) => {
                tracing::warn!(%company, rows, "posting upsert affected unexpected row count");
                false
            }
            Err(e) => {
                tracing::error!(%company, error = %e, "posting upsert failed");
                false
            }
        }
    }

    /// Loads the stored document for `company`, if one exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the pool or the query fails.
    pub async fn fetch_document(
        &self,
        company: Company,
    ) -> Result<Option<PostingRecord>, StoreError> {
        let mut conn = self.pools.acquire("fetch_posting").await?;
        let row = sqlx::query_as::<_, (String, NaiveDateTime, NaiveDateTime)>(SELECT_POSTING)
            .bind(company.as_str())
            .fetch_optional(&mut *conn)
            .await?;

        Ok(row.map(|(document, created_date, updated_date)| PostingRecord {
            company,
            document,
            created_date,
            updated_date,
        }))
    }

    /// Counts stored rows for `company`; at most one by construction.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the pool or the query fails.
    pub async fn count_for(&self, company: Company) -> Result<i64, StoreError> {
        let mut conn = self.pools.acquire("count_postings").await?;
        let count = sqlx::query_scalar::<_, i64>(COUNT_POSTINGS)
            .bind(company.as_str())
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }

    async fn try_insert(&self, company: Company, document: &str) -> Result<u64, StoreError> {
        let mut conn = self.pools.acquire("insert_posting").await?;
        let result = sqlx::query(INSERT_POSTING)
            .bind(company.as_str())
            .bind(document)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn try_upsert(&self, company: Company, document: &str) -> Result<u64, StoreError> {
        let mut conn = self.pools.acquire("upsert_posting").await?;
        let result = sqlx::query(UPSERT_POSTING)
            .bind(company.as_str())
            .bind(document)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
