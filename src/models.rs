use serde::Serialize;

/// Placeholder written for any field the listing page does not provide.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Timestamp layout of the `Scraped Date` column.
pub const SCRAPED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One scraped job posting, in output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Expiry Date")]
    pub expiry_date: String,
    #[serde(rename = "Job Description")]
    pub description: String,
    #[serde(rename = "Scraped Date")]
    pub scraped_at: String,
}

impl JobRecord {
    /// Builds a record from the fields found in a listing block.
    ///
    /// Missing fields fall back to [`NOT_SPECIFIED`]. Location and expiry
    /// date are not published by the site and always take the placeholder.
    pub fn from_fields(
        title: Option<String>,
        company: Option<String>,
        description: Option<String>,
        scraped_at: String,
    ) -> Self {
        let or_default = |field: Option<String>| field.unwrap_or_else(|| NOT_SPECIFIED.to_string());

        Self {
            title: or_default(title),
            company: or_default(company),
            location: NOT_SPECIFIED.to_string(),
            expiry_date: NOT_SPECIFIED.to_string(),
            description: or_default(description),
            scraped_at,
        }
    }
}
