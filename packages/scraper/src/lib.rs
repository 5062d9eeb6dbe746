// IBPS careers scraper
//
// Fetches the careers page, keeps job-related links, and snapshots them to
// CSV/JSON for the API's importer. Runs once or on a weekly schedule.

pub mod activity_log;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod models;
pub mod pipeline;
pub mod scheduler;
pub mod writer;

pub use activity_log::ActivityLog;
pub use config::{ExtractConfig, ScraperConfig};
pub use dedupe::dedupe;
pub use error::{Result, ScrapeError};
pub use extractor::{extract, guess_publish_date, is_job_link, normalize_link};
pub use fetcher::{FetchOutcome, HttpFetcher, PageFetcher};
pub use models::JobPosting;
pub use pipeline::{RunReport, ScrapePipeline};
pub use scheduler::WeeklySchedule;
pub use writer::{persist, SnapshotPaths};
