//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! Routes are mounted at the root because the scrapers post to fixed paths.

pub mod dto;
pub mod handlers;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "careerminer-api", description = "Ingestion API for scraped job postings"),
    paths(
        handlers::postings::submit_postings,
        handlers::postings::fetch_postings,
        handlers::system::health_handler,
        handlers::system::companies_handler,
    ),
    tags(
        (name = "Postings", description = "Scraped posting ingestion"),
        (name = "System", description = "Health and catalog"),
    )
)]
pub struct ApiDoc;

/// Builds the API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new().merge(handlers::routes())
}

/// Builds the complete application: routes, API docs, and HTTP layers.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    let router = build_router();

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route(
        "/api-docs/openapi.json",
        axum::routing::get(|| async { axum::Json(ApiDoc::openapi()) }),
    );

    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
