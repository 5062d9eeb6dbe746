use serde::{Deserialize, Serialize};

/// Sentinel stored when no date-like token is found in a title.
pub const NO_DATE: &str = "N/A";

/// A job-related link found on the careers page.
///
/// Equality covers every field, so two postings that differ only by a
/// trailing slash in the link are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "Job Title")]
    pub title: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Publish Date")]
    pub publish_date: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        publish_date: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            publish_date: publish_date.into(),
            link: link.into(),
        }
    }
}
