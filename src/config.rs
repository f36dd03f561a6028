//! Service configuration loaded from environment variables.
//!
//! All settings come from the environment (or a `.env` file via `dotenvy`).
//! Connection pool tuning is fixed in [`crate::persistence::PoolSettings`]
//! and intentionally not exposed here.

use std::net::SocketAddr;

/// Failures while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Neither `DATABASE_URL` nor `JDBC_URI` is set.
    #[error("DATABASE_URL (or JDBC_URI) must be set")]
    MissingDatabaseUrl,

    /// `LISTEN_ADDR` is set but not a socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    InvalidListenAddr {
        /// The rejected value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ApiConfig::from_env`].
#[derive(Clone)]
pub struct ApiConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Per-request timeout for the HTTP layer, in seconds.
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("listen_addr", &self.listen_addr)
            .field("database_url", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] if no connection string
    /// is configured, or [`ConfigError::InvalidListenAddr`] if `LISTEN_ADDR`
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|source| ConfigError::InvalidListenAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .or_else(|| lookup("JDBC_URI").filter(|v| !v.is_empty()).map(|v| from_jdbc(&v)))
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Ok(Self {
            listen_addr,
            database_url,
            request_timeout_secs,
        })
    }
}

/// Converts a `jdbc:postgresql://...` URI into a libpq-style URL.
fn from_jdbc(uri: &str) -> String {
    let stripped = uri.strip_prefix("jdbc:").unwrap_or(uri);
    match stripped.strip_prefix("postgresql://") {
        Some(rest) => format!("postgres://{rest}"),
        None => stripped.to_string(),
    }
}
