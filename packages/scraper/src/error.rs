//! Typed errors for the scraper library.
//!
//! Uses `thiserror` so callers can tell a transport failure apart from a
//! snapshot write failure. Non-200 responses are not errors; see
//! [`crate::fetcher::FetchOutcome`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the scrape pipeline.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request failed for a reason other than a non-200 status
    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Snapshot or log file could not be written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Cron scheduler rejected the job or failed to start
    #[error("scheduler error: {0}")]
    Scheduler(String),
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<tokio_cron_scheduler::JobSchedulerError> for ScrapeError {
    fn from(err: tokio_cron_scheduler::JobSchedulerError) -> Self {
        Self::Scheduler(err.to_string())
    }
}

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;
