//! System endpoints: health check and company catalog.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::domain::Company;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// `GET /config/companies` — List companies the service accepts.
#[utoipa::path(
    get,
    path = "/config/companies",
    tag = "System",
    summary = "List known companies",
    description = "Returns the display names accepted in `companyName`, in seed order.",
    responses(
        (status = 200, description = "Company catalog", body = Vec<String>),
    )
)]
pub async fn companies_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(Company::display_names()))
}

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/config/companies", get(companies_handler))
}
