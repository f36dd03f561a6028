//! Data Transfer Objects for REST responses.
//!
//! The request body is the domain type [`crate::domain::ScrapedData`].

pub mod postings_dto;

pub use postings_dto::*;
