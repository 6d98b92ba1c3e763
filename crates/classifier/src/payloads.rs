use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One row of the flat export. Issues, pull requests and their comments all
/// share this shape; comment rows repeat every column of their thread head.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub url: String,
    pub html_url: Option<String>,
    pub closed_at: Option<DateTime<Utc>>,
    pub labels: Option<String>,
    pub body: Option<String>,
    pub comment_created_at: Option<DateTime<Utc>>,
    pub comment_body: Option<String>,
    pub number: Option<i64>,
}
