//! Row types read back from the `data` schema.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::Company;

/// The current posting document stored for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingRecord {
    /// Company the document belongs to.
    pub company: Company,
    /// Stored JSON document, as text.
    pub document: String,
    /// When the row was first written.
    pub created_date: NaiveDateTime,
    /// When the document was last replaced.
    pub updated_date: NaiveDateTime,
}
