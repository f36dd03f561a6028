//! careerminer-api server entry point.
//!
//! Creates the connection pool (applying the schema), then serves the
//! ingestion endpoints until SIGINT/SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use careerminer_api::api;
use careerminer_api::app_state::AppState;
use careerminer_api::config::ApiConfig;
use careerminer_api::persistence::PoolManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = ApiConfig::from_env().context("loading configuration")?;
    tracing::info!(addr = %config.listen_addr, "starting careerminer-api");

    // Create the pool up front so a broken schema stops startup
    let pools = Arc::new(PoolManager::new(config.database_url.clone()));
    pools
        .get_pool()
        .await
        .context("initializing database pool")?;

    let app = api::build_app(
        AppState::new(Arc::clone(&pools)),
        Duration::from_secs(config.request_timeout_secs),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pools.close().await;
    served.context("serving http")?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Installs the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::warn!("received ctrl-c, shutting down"),
        () = terminate => tracing::warn!("received SIGTERM, shutting down"),
    }
}
