//! Shared query parameter types for page handlers.
//!
//! `page` is kept as a raw string so malformed values surface as a 404
//! rather than an extractor rejection.

use serde::Deserialize;

/// `?page=` on paginated listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// `?category=&page=` on the project listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub category: Option<String>,
    pub page: Option<String>,
}

/// `?sent=1` on the contact page after a successful submission.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPageParams {
    pub sent: Option<String>,
}

impl ContactPageParams {
    pub fn was_sent(&self) -> bool {
        matches!(self.sent.as_deref(), Some("1") | Some("true"))
    }
}
