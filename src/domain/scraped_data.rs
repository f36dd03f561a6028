//! Payload submitted by the scrapers.
//!
//! The service only reads `company_name`; the whole value is re-serialized
//! and stored verbatim as the posting document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One scrape run for one employer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedData {
    /// Employer display name; must match a known company exactly.
    pub company_name: String,
    /// When the scrape finished.
    pub scraped_at: DateTime<Utc>,
    /// Search term used on the careers site.
    pub search_term: String,
    /// Number of jobs the scraper reported.
    pub total_jobs: i32,
    /// Scraped job postings.
    pub jobs: Vec<JobDetails>,
}

/// A single scraped job posting. All fields are free text as scraped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    /// Link to the posting.
    pub job_url: String,
    /// Posting title.
    pub job_title: String,
    /// Full description text.
    pub description: String,
    /// Pay range as displayed, if any.
    pub pay_range: String,
    /// Location as displayed.
    pub location: String,
    /// Posting date as displayed.
    pub posting_date: String,
    /// Employer-side job identifier.
    pub job_id: String,
}

impl ScrapedData {
    /// Serializes the payload into the document stored for the company.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if serialization fails.
    pub fn to_document(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
