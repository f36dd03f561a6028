//! Idempotent schema bootstrap, applied once when the pool is created.
//!
//! Every statement is create-if-absent or insert-or-skip, so running the
//! batch against an already-initialized database changes nothing. The batch
//! runs in one transaction and is rolled back as a whole on failure.
//! Concurrent bootstraps from several processes are serialized by a
//! transaction-scoped advisory lock.

use sqlx::PgPool;

use crate::domain::Company;

/// Advisory lock key held for the duration of the bootstrap transaction.
pub const BOOTSTRAP_LOCK_KEY: i64 = 0x0043_4D42_4F4F_5453;

const ACQUIRE_BOOTSTRAP_LOCK: &str = "SELECT pg_advisory_xact_lock($1)";

/// DDL applied before the company seed.
const SCHEMA_DDL: &[&str] = &[
    "CREATE SCHEMA IF NOT EXISTS company",
    "CREATE SCHEMA IF NOT EXISTS data",
    "CREATE TABLE IF NOT EXISTS company.companies (
        id serial PRIMARY KEY,
        name text UNIQUE
    )",
];

/// Inserts the known companies, skipping names that already exist.
const SEED_COMPANIES: &str = "INSERT INTO company.companies (name) \
     SELECT unnest($1::text[]) \
     ON CONFLICT DO NOTHING";

/// DDL applied after the company seed.
const DATA_DDL: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS data.postings (
        company_id integer PRIMARY KEY REFERENCES company.companies (id),
        data jsonb NOT NULL DEFAULT '[]'::jsonb,
        created_date timestamp without time zone NOT NULL DEFAULT NOW(),
        updated_date timestamp without time zone NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS data.usage (
        company_id integer PRIMARY KEY REFERENCES company.companies (id),
        data jsonb NOT NULL DEFAULT '[]'::jsonb,
        created_date timestamp without time zone NOT NULL DEFAULT NOW()
    )",
];

const HAS_UPDATED_DATE: &str = "SELECT EXISTS (
        SELECT 1 FROM information_schema.columns
        WHERE table_schema = 'data'
          AND table_name = 'postings'
          AND column_name = 'updated_date'
    )";

/// Databases created before upserts existed lack this column. Only run when
/// the column is missing, since ALTER TABLE locks the table exclusively.
const ADD_UPDATED_DATE: &str = "ALTER TABLE data.postings
        ADD COLUMN IF NOT EXISTS updated_date timestamp without time zone NOT NULL DEFAULT NOW()";

/// What a bootstrap run changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Company rows inserted by the seed.
    pub seeded: u64,
    /// Whether `data.postings.updated_date` had to be added.
    pub added_updated_date: bool,
}

/// Creates the `company` and `data` schemas, their tables, and the company
/// seed rows if any of them are missing.
///
/// # Errors
///
/// Returns the first [`sqlx::Error`] raised by the batch. The transaction is
/// rolled back, so no part of the batch is left applied.
pub async fn ensure_schema(pool: &PgPool) -> Result<BootstrapReport, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(ACQUIRE_BOOTSTRAP_LOCK)
        .bind(BOOTSTRAP_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    for statement in SCHEMA_DDL {
        sqlx::query(*statement).execute(&mut *tx).await?;
    }

    let seeded = sqlx::query(SEED_COMPANIES)
        .bind(Company::display_names())
        .execute(&mut *tx)
        .await?
        .rows_affected();

    for statement in DATA_DDL {
        sqlx::query(*statement).execute(&mut *tx).await?;
    }

    let has_updated_date = sqlx::query_scalar::<_, bool>(HAS_UPDATED_DATE)
        .fetch_one(&mut *tx)
        .await?;
    if !has_updated_date {
        sqlx::query(ADD_UPDATED_DATE).execute(&mut *tx).await?;
    }

    tx.commit().await?;

    let report = BootstrapReport {
        seeded,
        added_updated_date: !has_updated_date,
    };
    tracing::info!(
        seeded = report.seeded,
        added_updated_date = report.added_updated_date,
        "schema bootstrap complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_statement_is_idempotent() {
        for statement in SCHEMA_DDL.iter().chain(DATA_DDL) {
            assert!(
                statement.contains("IF NOT EXISTS"),
                "not idempotent: {statement}"
            );
        }
        assert!(SEED_COMPANIES.contains("ON CONFLICT DO NOTHING"));
        assert!(ADD_UPDATED_DATE.contains("IF NOT EXISTS"));
    }

    #[test]
    fn postings_key_is_unique_per_company() {
        let Some(postings) = DATA_DDL.first() else {
            return;
        };
        assert!(postings.contains("company_id integer PRIMARY KEY"));
        assert!(postings.contains("DEFAULT '[]'::jsonb"));
    }

    #[test]
    fn bootstrap_lock_is_transaction_scoped() {
        assert!(ACQUIRE_BOOTSTRAP_LOCK.contains("pg_advisory_xact_lock"));
    }

    #[test]
    fn alter_table_is_not_in_unconditional_batch() {
        for statement in SCHEMA_DDL.iter().chain(DATA_DDL) {
            assert!(!statement.contains("ALTER TABLE"), "unguarded: {statement}");
        }
    }
}
