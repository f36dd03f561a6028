//! Posting ingestion DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Response body for `POST /data/job-information/post`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitPostingsResponse {
    /// Always `"processed"`.
    pub status: &'static str,
    /// Canonical name of the company the document was stored under.
    pub company: String,
    /// Job count echoed from the payload.
    pub total_jobs: i32,
}
