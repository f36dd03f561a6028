//! Posting ingestion handlers used by the scrapers.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::SubmitPostingsResponse;
use crate::app_state::AppState;
use crate::domain::ScrapedData;
use crate::error::{ApiError, ErrorResponse};

/// `POST /data/job-information/post` — Store the latest scrape for a company.
///
/// # Errors
///
/// Returns [`ApiError`] for a missing authorization header, an unreadable
/// body, an unknown company, or a store failure.
#[utoipa::path(
    post,
    path = "/data/job-information/post",
    tag = "Postings",
    summary = "Submit scraped postings",
    description = "Stores the payload as the current postings document for its company, replacing any earlier document.",
    params(
        ("Authorization" = String, Header, description = "Opaque client token"),
    ),
    request_body = ScrapedData,
    responses(
        (status = 200, description = "Postings stored", body = SubmitPostingsResponse),
        (status = 400, description = "Missing header, bad payload, or unknown company", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn submit_postings(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ScrapedData>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    require_authorization(&headers)?;
    let Json(data) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    let company = state.posting_service.submit(&data).await?;

    Ok(Json(SubmitPostingsResponse {
        status: "processed",
        company: company.to_string(),
        total_jobs: data.total_jobs,
    }))
}

/// `GET /data/job-information/get` — Declared read endpoint.
///
/// Reading stored postings back is not offered; this always answers with
/// an empty list.
///
/// # Errors
///
/// Returns [`ApiError::MissingAuthorization`] without an authorization header.
#[utoipa::path(
    get,
    path = "/data/job-information/get",
    tag = "Postings",
    summary = "Fetch postings (not implemented)",
    description = "Placeholder read endpoint. Always returns an empty array.",
    params(
        ("Authorization" = String, Header, description = "Opaque client token"),
    ),
    responses(
        (status = 200, description = "Empty list", body = Vec<ScrapedData>),
        (status = 400, description = "Missing authorization header", body = ErrorResponse),
    )
)]
pub async fn fetch_postings(headers: HeaderMap) -> Result<impl IntoResponse, ApiError> {
    require_authorization(&headers)?;
    tracing::info!("fetch postings requested; read path not available");
    Ok(Json(Vec::<ScrapedData>::new()))
}

/// Requires an `Authorization` header. The value is passed through
/// unchecked.
fn require_authorization(headers: &HeaderMap) -> Result<(), ApiError> {
    if headers.contains_key(AUTHORIZATION) {
        Ok(())
    } else {
        Err(ApiError::MissingAuthorization)
    }
}

/// Posting ingestion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/data/job-information/post", post(submit_postings))
        .route("/data/job-information/get", get(fetch_postings))
}
