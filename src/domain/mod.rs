//! Domain layer: employer identities and the scraper payload.

pub mod company;
pub mod scraped_data;

pub use company::{Company, UnknownCompanyError};
pub use scraped_data::{JobDetails, ScrapedData};
